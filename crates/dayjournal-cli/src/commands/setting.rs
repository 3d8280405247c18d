//! Settings commands for CLI.

use clap::Subcommand;
use dayjournal_core::clock::{parse_hhmm, DEFAULT_DAY_START};
use dayjournal_core::storage::DAY_START_KEY;
use dayjournal_core::JournalDb;

#[derive(Subcommand)]
pub enum SettingAction {
    /// Read a setting
    Get {
        /// Setting key
        key: String,
    },
    /// Write a setting
    Set {
        /// Setting key
        key: String,
        /// New value
        value: String,
    },
    /// Reset the day-start boundary to the default
    Reset,
}

pub fn run(action: SettingAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = JournalDb::open()?;

    match action {
        SettingAction::Get { key } => {
            let value = db.get_setting(&key, "")?;
            println!("{key} = {value}");
        }
        SettingAction::Set { key, value } => {
            if key == DAY_START_KEY {
                let clean = value.trim();
                let value = if clean.is_empty() {
                    DEFAULT_DAY_START.to_string()
                } else {
                    parse_hhmm(clean)?;
                    clean.to_string()
                };
                db.set_setting(DAY_START_KEY, &value)?;
                println!("{DAY_START_KEY} = {value}");
            } else {
                db.set_setting(&key, &value)?;
                println!("{key} = {value}");
            }
        }
        SettingAction::Reset => {
            db.set_setting(DAY_START_KEY, DEFAULT_DAY_START)?;
            println!("{DAY_START_KEY} = {DEFAULT_DAY_START}");
        }
    }

    Ok(())
}
