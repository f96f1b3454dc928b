use percent_encoding::percent_decode_str;
use percent_encoding::utf8_percent_encode;
use pokedex_protocol::navigation::PATH_SEGMENT;
use tracing::debug;

use crate::criteria::FieldValue;
use crate::criteria::FilterCriteria;
use crate::criteria::FilterField;
use crate::error::PathDecodeError;

/// Route prefix shared by every encoded filter path.
pub const FILTERED_SEARCH_ROOT: &str = "/filtered-search";

/// Converts between filter selections and `/filtered-search/...` paths.
///
/// Grammar: `/filtered-search/<field>/<value>/<field>/<value>/.../`. Pairs keep
/// the order they were supplied in, empty values keep their slot, and every
/// segment is percent-encoded. The encoder always terminates the path with
/// `/`. The decoder drops any run of leading separators but strips at most one
/// trailing separator, so a blank final value survives. Values are trimmed;
/// one that is empty after trimming is blank for every field.
pub struct FilterQueryCodec;

impl FilterQueryCodec {
    pub fn encode<I, K, V>(pairs: I) -> String
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut path = format!("{FILTERED_SEARCH_ROOT}/");
        for (name, value) in pairs {
            push_segment(&mut path, name.as_ref());
            push_segment(&mut path, value.as_ref());
        }
        path
    }

    pub fn encode_criteria(criteria: &FilterCriteria) -> String {
        Self::encode(criteria.to_pairs())
    }

    pub fn decode(path: &str) -> Result<FilterCriteria, PathDecodeError> {
        let rest = path
            .strip_prefix(FILTERED_SEARCH_ROOT)
            .filter(|rest| rest.is_empty() || rest.starts_with('/'))
            .ok_or_else(|| PathDecodeError::NotFilteredSearchPath(path.to_string()))?;
        let rest = rest.trim_start_matches('/');
        let rest = rest.strip_suffix('/').unwrap_or(rest);
        if rest.is_empty() {
            return Err(PathDecodeError::MissingGeneration);
        }

        let segments: Vec<String> = rest
            .split('/')
            .map(|segment| percent_decode_str(segment).decode_utf8_lossy().into_owned())
            .collect();
        if segments.len() % 2 != 0 {
            return Err(PathDecodeError::OddSegmentCount {
                count: segments.len(),
            });
        }

        let mut generation = None;
        let mut criteria = FilterCriteria::for_generation(0);
        for pair in segments.chunks_exact(2) {
            let (name, value) = (pair[0].as_str(), pair[1].as_str());
            let Some(field) = FilterField::parse(name) else {
                debug!(field = name, "ignoring unrecognized filter field");
                continue;
            };
            match field {
                FilterField::Generation => generation = Some(parse_generation(value)?),
                FilterField::Type => criteria.primary_type = Some(text_value(value)),
                FilterField::Type2 => criteria.secondary_type = Some(text_value(value)),
                FilterField::MinHeight => criteria.min_height = Some(number_value(name, value)?),
                FilterField::MaxHeight => criteria.max_height = Some(number_value(name, value)?),
                FilterField::MinWeight => criteria.min_weight = Some(number_value(name, value)?),
                FilterField::MaxWeight => criteria.max_weight = Some(number_value(name, value)?),
            }
        }

        criteria.generation = generation.ok_or(PathDecodeError::MissingGeneration)?;
        Ok(criteria)
    }
}

fn push_segment(path: &mut String, segment: &str) {
    path.extend(utf8_percent_encode(segment, PATH_SEGMENT));
    path.push('/');
}

fn parse_generation(value: &str) -> Result<u32, PathDecodeError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(PathDecodeError::MissingGeneration);
    }
    value.parse().map_err(|_| PathDecodeError::InvalidValue {
        field: FilterField::Generation.to_string(),
        value: value.to_string(),
    })
}

fn text_value(value: &str) -> FieldValue<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        FieldValue::Blank
    } else {
        FieldValue::Set(trimmed.to_string())
    }
}

fn number_value(field: &str, value: &str) -> Result<FieldValue<f64>, PathDecodeError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(FieldValue::Blank);
    }
    match trimmed.parse::<f64>() {
        Ok(number) if number.is_finite() => Ok(FieldValue::Set(number)),
        _ => Err(PathDecodeError::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
        }),
    }
}
