use crate::commands::{CmdMessage, CmdResult, StockroomPaths};
use crate::config::StockroomConfig;
use crate::error::{Result, StockroomError};

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(paths: &StockroomPaths, action: ConfigAction) -> Result<CmdResult> {
    let dir = &paths.config_dir;
    match action {
        ConfigAction::ShowAll => {
            let config = StockroomConfig::load(dir)?;
            let mut result = CmdResult::default().with_config(config);
            result.add_message(CmdMessage::info(format!(
                "Catalog file in use: {}",
                paths.data_file.display()
            )));
            Ok(result)
        }
        ConfigAction::ShowKey(key) => {
            let config = StockroomConfig::load(dir)?;
            let val = config
                .get(&key)
                .ok_or_else(|| StockroomError::Api(format!("Unknown config key: {}", key)))?;
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::info(val));
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            let mut config = StockroomConfig::load(dir)?;
            config.set(&key, &value).map_err(StockroomError::Api)?;
            config.save(dir)?;
            let display_val = config.get(&key).unwrap_or(value);
            let mut result = CmdResult::default().with_config(config);
            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                key, display_val
            )));
            Ok(result)
        }
    }
}
