use area_application::use_cases::ManageCollectionUseCase;
use area_domain::{Action, CollectionEntity, NewAction, NewReaction, Reaction, ServiceId};

use crate::render;
use crate::CollectionCommand;

/// Entities manageable from the command line.
pub trait CliEntity: CollectionEntity<Id = i64> {
    fn draft(service_id: ServiceId, name: &str, description: &str) -> Self::Draft;

    fn line(&self) -> String;
}

impl CliEntity for Action {
    fn draft(service_id: ServiceId, name: &str, description: &str) -> NewAction {
        NewAction::new(service_id, name, description)
    }

    fn line(&self) -> String {
        render::entry_line(self.id, &self.service_id, &self.name, &self.description)
    }
}

impl CliEntity for Reaction {
    fn draft(service_id: ServiceId, name: &str, description: &str) -> NewReaction {
        NewReaction::new(service_id, name, description)
    }

    fn line(&self) -> String {
        render::entry_line(self.id, &self.service_id, &self.name, &self.description)
    }
}

pub async fn run_collection<T: CliEntity>(
    use_case: &ManageCollectionUseCase<T>,
    command: CollectionCommand,
) -> anyhow::Result<()> {
    match command {
        CollectionCommand::List => {
            let items = use_case.load().await?;
            if items.is_empty() {
                println!("(none)");
            }
            for item in &items {
                println!("{}", item.line());
            }
        }
        CollectionCommand::Create {
            service_id,
            name,
            description,
        } => {
            let draft = T::draft(ServiceId::new(service_id), &name, &description);
            let created = use_case.create(&draft).await?;
            println!("Created {}", created.line());
        }
        CollectionCommand::Delete { id } => {
            use_case.delete(&id).await?;
            println!("Deleted #{}", id);
        }
    }
    Ok(())
}
