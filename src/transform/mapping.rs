use crate::model::FieldType;
use ahash::AHashMap;

/// `workUnitType` whose field type is decided by `responseType`.
pub const RESPONSE_DRIVEN_WORK_UNIT: &str = "1";

/// Default `workUnitType` codes with a fixed field type.
const DEFAULT_WORK_UNIT_TYPES: [(&str, FieldType); 1] = [("0", FieldType::Checkpoint)];

/// Default `responseType` codes, consulted for response-driven work units.
/// Multiple choice (`6`) is folded into `select`.
const DEFAULT_RESPONSE_TYPES: [(&str, FieldType); 7] = [
    ("1", FieldType::Text),
    ("2", FieldType::Number),
    ("3", FieldType::Select),
    ("4", FieldType::Checkbox),
    ("5", FieldType::Date),
    ("6", FieldType::Select),
    ("7", FieldType::Rating),
];

/// Registry translating upstream `(workUnitType, responseType)` codes into field types.
///
/// The mapping is total: any code pair it does not know resolves to `FieldType::Text`.
#[derive(Debug, Clone)]
pub struct TypeMapping {
    work_unit_types: AHashMap<String, FieldType>,
    response_types: AHashMap<String, FieldType>,
}

impl Default for TypeMapping {
    fn default() -> Self {
        let mut mapping = Self {
            work_unit_types: AHashMap::new(),
            response_types: AHashMap::new(),
        };
        for (code, field_type) in DEFAULT_WORK_UNIT_TYPES {
            mapping.set_work_unit_type(code, field_type);
        }
        for (code, field_type) in DEFAULT_RESPONSE_TYPES {
            mapping.set_response_type(code, field_type);
        }
        mapping
    }
}

impl TypeMapping {
    /// Registers a `workUnitType` that maps to one field type regardless of `responseType`.
    ///
    /// The response-driven code cannot be overridden this way.
    pub fn set_work_unit_type(&mut self, code: &str, field_type: FieldType) {
        let code = code.trim();
        if code != RESPONSE_DRIVEN_WORK_UNIT {
            self.work_unit_types.insert(code.to_string(), field_type);
        }
    }

    pub fn set_response_type(&mut self, code: &str, field_type: FieldType) {
        self.response_types
            .insert(code.trim().to_string(), field_type);
    }

    pub fn resolve(&self, work_unit_type: Option<&str>, response_type: Option<&str>) -> FieldType {
        match work_unit_type.map(str::trim) {
            Some(RESPONSE_DRIVEN_WORK_UNIT) => response_type
                .and_then(|code| self.response_types.get(code.trim()))
                .copied()
                .unwrap_or(FieldType::Text),
            Some(code) => self
                .work_unit_types
                .get(code)
                .copied()
                .unwrap_or(FieldType::Text),
            None => FieldType::Text,
        }
    }
}
