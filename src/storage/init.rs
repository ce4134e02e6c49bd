//! Storage initialization
//!
//! Handles first-run setup and default data creation

use crate::config::paths::TrakrPaths;
use crate::error::TrakrError;
use crate::models::Wallet;

use super::file_io::write_json_atomic;
use super::wallets::WalletData;

/// Initialize storage for a fresh installation
///
/// Creates the directory layout and seeds a default wallet
pub fn initialize_storage(paths: &TrakrPaths) -> Result<(), TrakrError> {
    // Ensure all directories exist
    paths.ensure_directories()?;

    // Seed a default wallet if wallets.json doesn't exist
    if !paths.wallets_file().exists() {
        create_default_wallet(paths)?;
    }

    Ok(())
}

/// Create the default "Cash" wallet every fresh install starts with
fn create_default_wallet(paths: &TrakrPaths) -> Result<(), TrakrError> {
    let mut wallet = Wallet::new("Cash");
    wallet.set_default(true);

    let data = WalletData {
        wallets: vec![wallet],
    };
    write_json_atomic(paths.wallets_file(), &data)?;

    Ok(())
}

/// Check if storage needs initialization
pub fn needs_initialization(paths: &TrakrPaths) -> bool {
    !paths.wallets_file().exists()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DEFAULT_CURRENCY;
    use tempfile::TempDir;

    #[test]
    fn test_initialize_storage() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrakrPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert!(needs_initialization(&paths));

        initialize_storage(&paths).unwrap();

        assert!(!needs_initialization(&paths));
        assert!(paths.wallets_file().exists());
        assert!(paths.data_dir().exists());
    }

    #[test]
    fn test_default_wallet_created() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrakrPaths::with_base_dir(temp_dir.path().to_path_buf());

        initialize_storage(&paths).unwrap();

        // Load and verify
        let content = std::fs::read_to_string(paths.wallets_file()).unwrap();
        let data: WalletData = serde_json::from_str(&content).unwrap();

        assert_eq!(data.wallets.len(), 1);
        assert_eq!(data.wallets[0].name, "Cash");
        assert_eq!(data.wallets[0].currency, DEFAULT_CURRENCY);
        assert!(data.wallets[0].is_default);
        assert!(data.wallets[0].starting_balance.is_zero());
    }

    #[test]
    fn test_doesnt_overwrite_existing() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrakrPaths::with_base_dir(temp_dir.path().to_path_buf());

        // First initialization
        initialize_storage(&paths).unwrap();

        // Replace the seeded data
        let custom_data = WalletData {
            wallets: vec![Wallet::new("Custom Wallet")],
        };
        write_json_atomic(paths.wallets_file(), &custom_data).unwrap();

        // Second initialization should not overwrite
        initialize_storage(&paths).unwrap();

        let content = std::fs::read_to_string(paths.wallets_file()).unwrap();
        let data: WalletData = serde_json::from_str(&content).unwrap();

        assert_eq!(data.wallets.len(), 1);
        assert_eq!(data.wallets[0].name, "Custom Wallet");
    }
}
