use std::fmt;

/// Field names understood in a filter path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterField {
    Generation,
    Type,
    Type2,
    MinHeight,
    MaxHeight,
    MinWeight,
    MaxWeight,
}

impl FilterField {
    /// Canonical encode order; also the order criteria are evaluated in.
    pub const ALL: [FilterField; 7] = [
        FilterField::Generation,
        FilterField::Type,
        FilterField::Type2,
        FilterField::MinHeight,
        FilterField::MaxHeight,
        FilterField::MinWeight,
        FilterField::MaxWeight,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FilterField::Generation => "generation",
            FilterField::Type => "type",
            FilterField::Type2 => "type2",
            FilterField::MinHeight => "minHeight",
            FilterField::MaxHeight => "maxHeight",
            FilterField::MinWeight => "minWeight",
            FilterField::MaxWeight => "maxWeight",
        }
    }

    /// Also accepts the single-slider names `height` and `weight` of the
    /// older path layout, which meant a lower bound.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "generation" => Some(FilterField::Generation),
            "type" => Some(FilterField::Type),
            "type2" => Some(FilterField::Type2),
            "minHeight" | "height" => Some(FilterField::MinHeight),
            "maxHeight" => Some(FilterField::MaxHeight),
            "minWeight" | "weight" => Some(FilterField::MinWeight),
            "maxWeight" => Some(FilterField::MaxWeight),
            _ => None,
        }
    }
}

impl fmt::Display for FilterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Value of a field that is present in the path. An absent field is `None`
/// on [`FilterCriteria`]; a present field with an empty value is `Blank`.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue<T> {
    Blank,
    Set(T),
}

impl<T> FieldValue<T> {
    pub fn as_set(&self) -> Option<&T> {
        match self {
            FieldValue::Blank => None,
            FieldValue::Set(value) => Some(value),
        }
    }
}

impl<T: fmt::Display> FieldValue<T> {
    fn encode(&self) -> String {
        match self {
            FieldValue::Blank => String::new(),
            FieldValue::Set(value) => value.to_string(),
        }
    }
}

/// Decoded filter selection for one results view.
///
/// Heights are in metres and weights in kilograms, as entered by the user.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria {
    pub generation: u32,
    pub primary_type: Option<FieldValue<String>>,
    pub secondary_type: Option<FieldValue<String>>,
    pub min_height: Option<FieldValue<f64>>,
    pub max_height: Option<FieldValue<f64>>,
    pub min_weight: Option<FieldValue<f64>>,
    pub max_weight: Option<FieldValue<f64>>,
}

impl FilterCriteria {
    pub fn for_generation(generation: u32) -> Self {
        Self {
            generation,
            primary_type: None,
            secondary_type: None,
            min_height: None,
            max_height: None,
            min_weight: None,
            max_weight: None,
        }
    }

    pub fn with_type(mut self, name: impl Into<String>) -> Self {
        self.primary_type = Some(FieldValue::Set(name.into()));
        self
    }

    pub fn with_type2(mut self, name: impl Into<String>) -> Self {
        self.secondary_type = Some(FieldValue::Set(name.into()));
        self
    }

    pub fn with_height_range(mut self, min_m: f64, max_m: f64) -> Self {
        self.min_height = Some(FieldValue::Set(min_m));
        self.max_height = Some(FieldValue::Set(max_m));
        self
    }

    pub fn with_weight_range(mut self, min_kg: f64, max_kg: f64) -> Self {
        self.min_weight = Some(FieldValue::Set(min_kg));
        self.max_weight = Some(FieldValue::Set(max_kg));
        self
    }

    /// True when nothing besides the generation was supplied.
    pub fn has_no_criteria(&self) -> bool {
        self.primary_type.is_none()
            && self.secondary_type.is_none()
            && self.min_height.is_none()
            && self.max_height.is_none()
            && self.min_weight.is_none()
            && self.max_weight.is_none()
    }

    /// Present fields as `(name, value)` pairs in canonical order.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![(FilterField::Generation.as_str(), self.generation.to_string())];
        let text = [
            (FilterField::Type, &self.primary_type),
            (FilterField::Type2, &self.secondary_type),
        ];
        for (field, value) in text {
            if let Some(value) = value {
                pairs.push((field.as_str(), value.encode()));
            }
        }
        let numeric = [
            (FilterField::MinHeight, &self.min_height),
            (FilterField::MaxHeight, &self.max_height),
            (FilterField::MinWeight, &self.min_weight),
            (FilterField::MaxWeight, &self.max_weight),
        ];
        for (field, value) in numeric {
            if let Some(value) = value {
                pairs.push((field.as_str(), value.encode()));
            }
        }
        pairs
    }
}
