use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use gridvis_core::{Coord, LayoutTemplate, Tier, TierLayout};

use crate::error::LoadError;

const DATA_KEY: &str = "data";

#[derive(Debug, Serialize, Deserialize)]
struct TemplateData {
    anchor: Coord,
}

fn parse_tier(key: &str) -> Result<Tier, LoadError> {
    match key.parse::<Tier>() {
        Ok(tier) if (1..=LayoutTemplate::MAX_TIER).contains(&tier) => Ok(tier),
        _ => Err(LoadError::InvalidTier(key.to_string())),
    }
}

fn from_entries(mut entries: BTreeMap<String, Value>) -> Result<LayoutTemplate, LoadError> {
    let data = entries.remove(DATA_KEY).ok_or(LoadError::MissingAnchor)?;
    let data: TemplateData = serde_json::from_value(data)?;

    let mut template = LayoutTemplate::new(data.anchor);
    for (key, value) in entries {
        let tier = parse_tier(&key)?;
        let layout: TierLayout = serde_json::from_value(value)?;
        log::debug!("tier {}: {} icons", tier, layout.icon_count());
        template.tiers.insert(tier, layout);
    }
    Ok(template)
}

pub fn parse_template(json: &str) -> Result<LayoutTemplate, LoadError> {
    from_entries(serde_json::from_str(json)?)
}

pub fn read_template<R: Read>(reader: R) -> Result<LayoutTemplate, LoadError> {
    from_entries(serde_json::from_reader(reader)?)
}

pub fn load_template(path: impl AsRef<Path>) -> Result<LayoutTemplate, LoadError> {
    let path = path.as_ref();
    let template = read_template(BufReader::new(File::open(path)?))?;
    log::info!(
        "Loaded layout template {} with {} tiers",
        path.display(),
        template.tiers.len()
    );
    Ok(template)
}

fn to_value(template: &LayoutTemplate) -> Result<Value, LoadError> {
    let mut map = Map::new();
    map.insert(
        DATA_KEY.to_string(),
        serde_json::to_value(TemplateData {
            anchor: template.anchor,
        })?,
    );
    for (tier, layout) in &template.tiers {
        map.insert(tier.to_string(), serde_json::to_value(layout)?);
    }
    Ok(Value::Object(map))
}

pub fn template_to_json(template: &LayoutTemplate) -> Result<String, LoadError> {
    Ok(serde_json::to_string_pretty(&to_value(template)?)?)
}

pub fn save_template(template: &LayoutTemplate, path: impl AsRef<Path>) -> Result<(), LoadError> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, &to_value(template)?)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridvis_core::ROAD;

    const BUNKER: &str = r#"{
        "data": { "anchor": { "x": 25, "y": 25 } },
        "8": {
            "buildings": {
                "road": { "pos": [ { "x": 24, "y": 25 }, { "x": 26, "y": 25 } ] },
                "storage": { "pos": [ { "x": 25, "y": 24 } ] }
            }
        },
        "3": { "buildings": { "road": { "pos": [ { "x": 24, "y": 25 } ] } } }
    }"#;

    #[test]
    fn test_parse_bunker_template() {
        let template = parse_template(BUNKER).unwrap();
        assert_eq!(template.anchor, Coord::new(25, 25));
        assert_eq!(template.tiers.len(), 2);
        let top = template.tier(LayoutTemplate::MAX_TIER).unwrap();
        assert_eq!(top.icon_count(), 3);
        assert_eq!(top.buildings[ROAD].pos[1], Coord::new(26, 25));
    }

    #[test]
    fn test_written_json_uses_tier_keys() {
        let template = LayoutTemplate::new(Coord::new(1, 2))
            .with_building(8, ROAD, vec![Coord::new(0, 0)]);
        let value: Value = serde_json::from_str(&template_to_json(&template).unwrap()).unwrap();
        let top = value.as_object().unwrap();
        assert_eq!(top.len(), 2);
        assert_eq!(top["data"]["anchor"]["y"], 2);
        assert_eq!(top["8"]["buildings"]["road"]["pos"][0]["x"], 0);
        assert!(!top.contains_key("tiers"));
        assert!(!top.contains_key("anchor"));
        assert_eq!(parse_template(&template_to_json(&template).unwrap()).unwrap(), template);
    }

    #[test]
    fn test_missing_anchor() {
        let err = parse_template(r#"{ "8": { "buildings": {} } }"#).unwrap_err();
        assert!(matches!(err, LoadError::MissingAnchor));
    }

    #[test]
    fn test_invalid_tier_keys() {
        for key in ["0", "9", "rcl"] {
            let json = format!(r#"{{ "data": {{ "anchor": {{ "x": 0, "y": 0 }} }}, "{}": {{ "buildings": {{}} }} }}"#, key);
            match parse_template(&json) {
                Err(LoadError::InvalidTier(k)) => assert_eq!(k, key),
                other => panic!("expected invalid tier for {}, got {:?}", key, other),
            }
        }
    }

    #[test]
    fn test_save_and_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bunker.json");
        let template = parse_template(BUNKER).unwrap();
        save_template(&template, &path).unwrap();
        assert_eq!(load_template(&path).unwrap(), template);

        let json = template_to_json(&template).unwrap();
        assert!(json.contains(r#""data""#));
        assert!(json.contains(r#""8""#));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_template(dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
    }
}
