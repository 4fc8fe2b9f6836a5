/// Source of the current user's auth token.
///
/// Set on login, read by every authenticated call, cleared on logout.
pub trait TokenProvider: Send + Sync {
    fn token(&self) -> Option<String>;

    fn set_token(&self, token: String);

    fn clear(&self);

    fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }
}
