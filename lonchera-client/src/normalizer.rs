use lonchera_model::LunchIdea;
use serde_json::Value;

const FENCE: &str = "```";
const FENCE_LANGUAGE: &str = "json";

#[derive(Debug, thiserror::Error)]
pub enum NormalizeError {
    #[error("no JSON payload found in upstream text")]
    NoJson { raw: String },
    #[error("malformed JSON payload: {source}")]
    Malformed {
        raw: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("unexpected payload shape: {source}")]
    UnexpectedShape {
        raw: String,
        #[source]
        source: serde_json::Error,
    },
}

impl NormalizeError {
    /// The upstream text exactly as it was received.
    pub fn raw(&self) -> &str {
        match self {
            NormalizeError::NoJson { raw }
            | NormalizeError::Malformed { raw, .. }
            | NormalizeError::UnexpectedShape { raw, .. } => raw,
        }
    }
}

type Result<T> = std::result::Result<T, NormalizeError>;

/// Removes every ```` ``` ```` marker, together with a directly following
/// `json` language tag (any case).
fn strip_code_fences(raw: &str) -> String {
    // ASCII lowercasing keeps byte offsets identical to `raw`.
    let lower = raw.to_ascii_lowercase();
    let mut cleaned = String::with_capacity(raw.len());
    let mut cursor = 0;

    while let Some(offset) = raw[cursor..].find(FENCE) {
        let start = cursor + offset;
        cleaned.push_str(&raw[cursor..start]);

        cursor = start + FENCE.len();
        if lower[cursor..].starts_with(FENCE_LANGUAGE) {
            cursor += FENCE_LANGUAGE.len();
        }
    }
    cleaned.push_str(&raw[cursor..]);

    cleaned
}

/// Every `{...}` or `[...]` span of `cleaned`, in order of its opening
/// bracket, parsed up to the end of its first complete JSON value.
fn json_spans(cleaned: &str) -> impl Iterator<Item = serde_json::Result<Value>> + '_ {
    cleaned
        .match_indices(|c: char| c == '{' || c == '[')
        .filter_map(move |(start, _)| {
            serde_json::Deserializer::from_str(&cleaned[start..])
                .into_iter::<Value>()
                .next()
        })
}

fn no_payload(raw: &str, first_error: Option<serde_json::Error>) -> NormalizeError {
    match first_error {
        Some(source) => NormalizeError::Malformed {
            raw: raw.to_owned(),
            source,
        },
        None => NormalizeError::NoJson {
            raw: raw.to_owned(),
        },
    }
}

/// Finds the first `{...}` or `[...]` span in `raw` that parses as JSON.
///
/// Prose before the span is skipped, and anything after the first complete
/// JSON value is ignored.
pub fn extract_json(raw: &str) -> Result<Value> {
    let cleaned = strip_code_fences(raw);

    let mut first_error = None;
    for span in json_spans(cleaned.trim()) {
        match span {
            Ok(value) => return Ok(value),
            Err(e) => {
                first_error.get_or_insert(e);
            }
        }
    }

    Err(no_payload(raw, first_error))
}

fn lunch_list(value: Value) -> serde_json::Result<Vec<LunchIdea>> {
    let list = match value {
        Value::Object(mut map) => map
            .remove("loncheras")
            .filter(|list| !list.is_null())
            .or_else(|| map.remove("lunches"))
            .unwrap_or(Value::Null),
        other => other,
    };

    if list.is_null() {
        return Ok(Vec::new());
    }

    serde_json::from_value(list)
}

/// Extracts the lunch list from upstream text.
///
/// An object payload contributes its `loncheras` (or `lunches`) member, an
/// array payload is taken as the list itself. A missing or null list is
/// treated as empty. Spans are tried in order until one holds a lunch list.
pub fn extract_lunches(raw: &str) -> Result<Vec<LunchIdea>> {
    let cleaned = strip_code_fences(raw);

    let mut first_parse_error = None;
    let mut first_shape_error = None;
    for span in json_spans(cleaned.trim()) {
        match span.map(lunch_list) {
            Ok(Ok(lunches)) => return Ok(lunches),
            Ok(Err(e)) => {
                first_shape_error.get_or_insert(e);
            }
            Err(e) => {
                first_parse_error.get_or_insert(e);
            }
        }
    }

    match first_shape_error {
        Some(source) => Err(NormalizeError::UnexpectedShape {
            raw: raw.to_owned(),
            source,
        }),
        None => Err(no_payload(raw, first_parse_error)),
    }
}
