use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt;


/// Raw stat mapping for one split, keyed by the Stats API's stat names.
pub type StatMap = Map<String, Value>;

/// Stats API stat name → report column, in report order.
pub const STAT_KEYS: [(&str, &str); 14] = [
    ("gamesPlayed", "g"),
    ("atBats", "ab"),
    ("runs", "r"),
    ("hits", "h"),
    ("doubles", "2b"),
    ("triples", "3b"),
    ("homeRuns", "hr"),
    ("rbi", "rbi"),
    ("baseOnBalls", "bb"),
    ("strikeOuts", "so"),
    ("avg", "avg"),
    ("obp", "obp"),
    ("slg", "slg"),
    ("ops", "ops"),
];

/// `stat` is sometimes `null` on placeholder splits; treat anything that is
/// not an object as an empty mapping.
fn de_lenient_stat_map<'de, D>(deserializer: D) -> Result<StatMap, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Object(map) => Ok(map),
        _ => Ok(StatMap::new()),
    }
}

/// A list that is `null` or not an array reads as empty. Elements of the
/// wrong shape become their default so positions are kept.
fn de_lenient_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => Ok(items
            .into_iter()
            .map(|item| serde_json::from_value(item).unwrap_or_default())
            .collect()),
        _ => Ok(Vec::new()),
    }
}

/// Envelope returned by `/people/{id}/stats`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StatsResponse {
    #[serde(default, deserialize_with = "de_lenient_vec")]
    pub stats: Vec<StatGroup>,
}

/// One `stats=..., group=...` block of the response
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StatGroup {
    #[serde(default, deserialize_with = "de_lenient_vec")]
    pub splits: Vec<Split>,
}

/// A season split: aggregated stats for one player in one season.
///
/// Only `stat` is read; `season`, `team` and the rest are ignored.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Split {
    #[serde(default, deserialize_with = "de_lenient_stat_map")]
    pub stat: StatMap,
}

impl StatsResponse {
    /// Stat mapping of the first split with anything in it.
    ///
    /// Only the first stat group is considered; the hitting query returns one.
    pub fn first_stat_map(&self) -> Option<&StatMap> {
        self.stats
            .first()?
            .splits
            .iter()
            .map(|split| &split.stat)
            .find(|stat| !stat.is_empty())
    }
}

/// A reported stat value.
///
/// Counting stats arrive as JSON integers; rate stats (`avg`, `obp`, ...)
/// arrive as strings like `".285"` and are kept as sent.
#[derive(Debug, Clone, PartialEq)]
pub enum StatValue {
    Int(i64),
    Float(f64),
    /// A numeric string, exactly as the provider wrote it.
    Text(String),
}

impl StatValue {
    /// Parse a raw JSON value, returning `None` for anything non-numeric
    /// (`null`, `"-.--"`, `".---"`, objects, ...).
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => n
                .as_i64()
                .map(StatValue::Int)
                .or_else(|| n.as_f64().map(StatValue::Float)),
            Value::String(s) => Self::parse_str(s),
            _ => None,
        }
    }

    fn parse_str(s: &str) -> Option<Self> {
        s.trim()
            .parse::<f64>()
            .ok()
            .filter(|f| f.is_finite())
            .map(|_| StatValue::Text(s.to_string()))
    }
}

impl fmt::Display for StatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatValue::Int(i) => write!(f, "{}", i),
            StatValue::Float(x) => write!(f, "{}", x),
            StatValue::Text(s) => f.write_str(s),
        }
    }
}

impl Serialize for StatValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            StatValue::Int(i) => serializer.serialize_i64(*i),
            StatValue::Float(x) => serializer.serialize_f64(*x),
            StatValue::Text(s) => serializer.serialize_str(s),
        }
    }
}

/// The fourteen hitting stats carried into the report, in `STAT_KEYS` order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HittingStats {
    values: [Option<StatValue>; STAT_KEYS.len()],
}

impl HittingStats {
    /// Pick the known keys out of a raw stat mapping. Missing or malformed
    /// values stay `None`; no range checks.
    pub fn from_stat_map(stat: &StatMap) -> Self {
        let values = std::array::from_fn(|i| {
            let (api_key, _) = STAT_KEYS[i];
            stat.get(api_key).and_then(StatValue::from_json)
        });
        Self { values }
    }

    /// Look up a value by report column name (`"ab"`, `"2b"`, ...).
    pub fn get(&self, column: &str) -> Option<&StatValue> {
        STAT_KEYS
            .iter()
            .position(|(_, col)| *col == column)
            .and_then(|i| self.values[i].as_ref())
    }

    /// `(column, value)` pairs in report order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, Option<&StatValue>)> + '_ {
        STAT_KEYS
            .iter()
            .zip(self.values.iter())
            .map(|((_, col), value)| (*col, value.as_ref()))
    }

    pub fn is_empty(&self) -> bool {
        self.values.iter().all(Option::is_none)
    }
}

impl Serialize for HittingStats {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(STAT_KEYS.len()))?;
        for (column, value) in self.iter() {
            map.serialize_entry(column, &value)?;
        }
        map.end()
    }
}
