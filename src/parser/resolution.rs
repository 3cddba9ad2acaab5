//! Typed parse results.

use serde::Serialize;

use crate::switches::SwitchId;

/// The value a switch resolved to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SwitchValue {
    /// A binary switch was present.
    Flag,
    /// The argument following a single-value switch.
    Single(String),
    /// The consecutive plain arguments following a list switch, in order.
    List(Vec<String>),
}

impl SwitchValue {
    pub fn is_flag(&self) -> bool {
        matches!(self, SwitchValue::Flag)
    }

    pub fn as_single(&self) -> Option<&str> {
        match self {
            SwitchValue::Single(value) => Some(value.as_str()),
            SwitchValue::Flag | SwitchValue::List(_) => None,
        }
    }

    /// The discrete value strings: none for a flag, one for a single value.
    pub fn items(&self) -> &[String] {
        match self {
            SwitchValue::Flag => &[],
            SwitchValue::Single(value) => std::slice::from_ref(value),
            SwitchValue::List(values) => values,
        }
    }

    /// Values joined by one space, the way list values were traditionally handed to setters.
    ///
    /// Only lossless when no item contains whitespace; prefer [`items`](Self::items).
    pub fn joined(&self) -> Option<String> {
        match self {
            SwitchValue::Flag => None,
            SwitchValue::Single(value) => Some(value.clone()),
            SwitchValue::List(values) => Some(values.join(" ")),
        }
    }
}

/// One dispatched switch and its value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub switch: SwitchId,
    pub value: SwitchValue,
}

/// Everything a successful parse resolved, in dispatch order.
///
/// A switch given more than once appears once per occurrence; [`get`](Self::get) returns the
/// last one, which is what a setter called in order would have kept.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct Resolved {
    resolutions: Vec<Resolution>,
}

impl Resolved {
    pub fn new(resolutions: Vec<Resolution>) -> Self {
        Self { resolutions }
    }

    pub fn len(&self) -> usize {
        self.resolutions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resolutions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Resolution> {
        self.resolutions.iter()
    }

    pub fn get(&self, switch: SwitchId) -> Option<&SwitchValue> {
        self.occurrences(switch).last()
    }

    pub fn contains(&self, switch: SwitchId) -> bool {
        self.resolutions.iter().any(|r| r.switch == switch)
    }

    /// Every value `switch` received, in order.
    pub fn occurrences(&self, switch: SwitchId) -> impl Iterator<Item = &SwitchValue> + '_ {
        self.resolutions
            .iter()
            .filter(move |r| r.switch == switch)
            .map(|r| &r.value)
    }

    pub fn into_vec(self) -> Vec<Resolution> {
        self.resolutions
    }
}

impl IntoIterator for Resolved {
    type Item = Resolution;
    type IntoIter = std::vec::IntoIter<Resolution>;

    fn into_iter(self) -> Self::IntoIter {
        self.resolutions.into_iter()
    }
}

impl<'a> IntoIterator for &'a Resolved {
    type Item = &'a Resolution;
    type IntoIter = std::slice::Iter<'a, Resolution>;

    fn into_iter(self) -> Self::IntoIter {
        self.resolutions.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_items() {
        assert!(SwitchValue::Flag.items().is_empty());
        assert_eq!(SwitchValue::Single("x".into()).items(), ["x".to_string()]);
        assert_eq!(
            SwitchValue::List(strings(&["77", "123"])).items(),
            strings(&["77", "123"]).as_slice()
        );
    }

    #[test]
    fn test_joined() {
        assert_eq!(SwitchValue::Flag.joined(), None);
        assert_eq!(
            SwitchValue::List(strings(&["77", "123", "hello"])).joined(),
            Some("77 123 hello".to_string())
        );
        assert_eq!(SwitchValue::Single("zeta".into()).joined(), Some("zeta".into()));
    }

    #[test]
    fn test_last_occurrence_wins() {
        let resolved = Resolved::new(vec![
            Resolution {
                switch: SwitchId(0),
                value: SwitchValue::Single("first".into()),
            },
            Resolution {
                switch: SwitchId(1),
                value: SwitchValue::Flag,
            },
            Resolution {
                switch: SwitchId(0),
                value: SwitchValue::Single("second".into()),
            },
        ]);

        assert_eq!(resolved.len(), 3);
        assert_eq!(
            resolved.get(SwitchId(0)).and_then(SwitchValue::as_single),
            Some("second")
        );
        assert_eq!(resolved.occurrences(SwitchId(0)).count(), 2);
        assert!(resolved.contains(SwitchId(1)));
        assert!(!resolved.contains(SwitchId(2)));
        assert_eq!(resolved.get(SwitchId(2)), None);
    }

    #[test]
    fn test_serializes_as_tagged_values() {
        let resolved = Resolved::new(vec![
            Resolution {
                switch: SwitchId(0),
                value: SwitchValue::Flag,
            },
            Resolution {
                switch: SwitchId(2),
                value: SwitchValue::List(strings(&["a", "b"])),
            },
        ]);
        let json = serde_json::to_string(&resolved).expect("serializable");
        assert_eq!(
            json,
            r#"[{"switch":0,"value":"flag"},{"switch":2,"value":{"list":["a","b"]}}]"#
        );
    }
}
