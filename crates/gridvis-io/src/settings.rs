use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use gridvis_core::RenderConfig;

use crate::error::LoadError;

/// Read text metrics; fields missing from the JSON keep their defaults.
pub fn read_config<R: Read>(reader: R) -> Result<RenderConfig, LoadError> {
    Ok(serde_json::from_reader(reader)?)
}

pub fn load_config(path: impl AsRef<Path>) -> Result<RenderConfig, LoadError> {
    let path = path.as_ref();
    let config = read_config(BufReader::new(File::open(path)?))?;
    log::info!(
        "Loaded render config {}: char {}x{}",
        path.display(),
        config.char_width(),
        config.char_height()
    );
    Ok(config)
}

pub fn save_config(config: &RenderConfig, path: impl AsRef<Path>) -> Result<(), LoadError> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, config)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_partial_config() {
        let json = r##"{ "text_color": "#ffffff", "text_size": 1.0 }"##;
        let config = read_config(json.as_bytes()).unwrap();
        assert_eq!(config.text_color, "#ffffff");
        assert!((config.char_width() - 0.4).abs() < 1e-10);
        assert_eq!(config.font_family, "Trebuchet MS");
    }

    #[test]
    fn test_config_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("render.json");
        let config = RenderConfig {
            font_family: "monospace".to_string(),
            ..RenderConfig::default()
        };
        save_config(&config, &path).unwrap();
        assert_eq!(load_config(&path).unwrap(), config);
    }

    #[test]
    fn test_malformed_config() {
        let err = read_config(r#"{ "text_size": "big" }"#.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::Json(_)));
    }
}
