#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use formarte_common::KeyValueStore;
    use formarte_storage::{MemoryStore, SharedStore};

    use crate::directory::AccountDirectory;
    use crate::error::AuthError;
    use crate::password::hash_password;

    const KEY: &str = "users";

    #[tokio::test]
    async fn register_then_authenticate() {
        let kv: SharedStore = Arc::new(MemoryStore::new());
        let mut directory = AccountDirectory::load(kv, KEY).await;

        let account = directory
            .register(" Ana Gómez ", "Ana@FormArte.edu.co", "secreto1")
            .await
            .unwrap();
        assert_eq!(account.name, "Ana Gómez");
        assert_eq!(account.email, "ana@formarte.edu.co");
        assert_eq!(account.password_hash, hash_password("secreto1"));

        assert!(directory.authenticate("ANA@formarte.edu.co", "secreto1").is_ok());
        assert!(matches!(
            directory.authenticate("ana@formarte.edu.co", "otro"),
            Err(AuthError::InvalidCredentials)
        ));
        assert!(matches!(
            directory.authenticate("nadie@formarte.edu.co", "secreto1"),
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected_case_insensitively() {
        let kv: SharedStore = Arc::new(MemoryStore::new());
        let mut directory = AccountDirectory::load(kv, KEY).await;
        directory.register("Ana", "ana@formarte.edu.co", "secreto1").await.unwrap();

        let err = directory
            .register("Otra Ana", "ANA@formarte.edu.co", "secreto2")
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Este correo electrónico ya está registrado.");
        assert_eq!(directory.len(), 1);
    }

    #[tokio::test]
    async fn accounts_persist_without_plain_passwords() {
        let memory = MemoryStore::new();
        let kv: SharedStore = Arc::new(memory.clone());
        let mut directory = AccountDirectory::load(kv.clone(), KEY).await;
        directory.register("Ana", "ana@formarte.edu.co", "secreto1").await.unwrap();

        let raw = memory.get(KEY).await.unwrap().unwrap();
        assert!(!raw.contains("secreto1"));
        assert!(raw.contains("passwordHash"));

        let reloaded = AccountDirectory::load(kv, KEY).await;
        assert!(reloaded.authenticate("ana@formarte.edu.co", "secreto1").is_ok());
    }

    #[tokio::test]
    async fn reset_password_replaces_digest() {
        let kv: SharedStore = Arc::new(MemoryStore::new());
        let mut directory = AccountDirectory::load(kv, KEY).await;
        directory.register("Ana", "ana@formarte.edu.co", "secreto1").await.unwrap();

        directory.reset_password("ana@formarte.edu.co", "nueva123").await.unwrap();
        assert!(directory.authenticate("ana@formarte.edu.co", "nueva123").is_ok());
        assert!(directory.authenticate("ana@formarte.edu.co", "secreto1").is_err());

        assert!(matches!(
            directory.reset_password("nadie@formarte.edu.co", "nueva123").await,
            Err(AuthError::AccountNotFound)
        ));
    }

    #[tokio::test]
    async fn corrupt_entry_loads_empty() {
        let kv: SharedStore = Arc::new(MemoryStore::with_entries([(KEY, "{not json")]));
        let directory = AccountDirectory::load(kv, KEY).await;
        assert!(directory.is_empty());
    }
}
