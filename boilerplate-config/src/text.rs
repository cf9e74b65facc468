//! String fields that tolerate scalar input.
//!
//! Environment variables and unquoted YAML scalars such as `12345` or `1e50`
//! arrive as numbers; a string field takes them as their textual form.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum TextValue {
    Text(String),
    Unsigned(u64),
    Signed(i64),
    Float(f64),
    Bool(bool),
}

/// `serde(deserialize_with)` adapter for `String` fields.
pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match TextValue::deserialize(deserializer)? {
        TextValue::Text(s) => s,
        TextValue::Unsigned(n) => n.to_string(),
        TextValue::Signed(n) => n.to_string(),
        TextValue::Float(n) => n.to_string(),
        TextValue::Bool(b) => b.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::{
        providers::{Format, Yaml},
        Figment,
    };

    #[derive(Deserialize)]
    struct Named {
        #[serde(deserialize_with = "deserialize")]
        name: String,
    }

    fn extract(yaml: &str) -> String {
        Figment::from(Yaml::string(yaml))
            .extract::<Named>()
            .unwrap()
            .name
    }

    #[test]
    fn scalars_become_text() {
        assert_eq!(extract("name: orders"), "orders");
        assert_eq!(extract("name: 12345"), "12345");
        assert_eq!(extract("name: -7"), "-7");
        assert_eq!(extract("name: true"), "true");
        assert_eq!(extract("name: '0123'"), "0123");
    }
}
