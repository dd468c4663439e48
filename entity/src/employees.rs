use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "employees")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: Option<String>,
    pub location: Option<String>,
    pub department: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        panic!("no relations")
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// The client-controlled columns of an employee.
///
/// Missing keys deserialize as `None`; an `id` key is ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmployeeFields {
    pub name: Option<String>,
    pub location: Option<String>,
    pub department: Option<String>,
}

/// An employee that may not have been persisted yet.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Draft {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub location: Option<String>,
    pub department: Option<String>,
}

impl Draft {
    pub fn new(fields: EmployeeFields) -> Self {
        Self {
            id: None,
            name: fields.name,
            location: fields.location,
            department: fields.department,
        }
    }

    /// Replace every mutable column with `fields`, nulls included.
    pub fn overwrite(&mut self, fields: EmployeeFields) {
        self.name = fields.name;
        self.location = fields.location;
        self.department = fields.department;
    }
}

impl From<Model> for Draft {
    fn from(model: Model) -> Self {
        Self {
            id: Some(model.id),
            name: model.name,
            location: model.location,
            department: model.department,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn model_serializes_all_columns() {
        let model = Model {
            id: 1,
            name: Some("Ann".into()),
            location: None,
            department: Some("Eng".into()),
        };
        let value = serde_json::to_value(&model).unwrap();
        assert_eq!(
            value,
            json!({"id": 1, "name": "Ann", "location": null, "department": "Eng"})
        );
    }

    #[test]
    fn fields_ignore_id_and_default_missing_keys() {
        let fields: EmployeeFields =
            serde_json::from_value(json!({"id": 42, "name": "Bo"})).unwrap();
        assert_eq!(
            fields,
            EmployeeFields {
                name: Some("Bo".into()),
                location: None,
                department: None,
            }
        );
    }

    #[test]
    fn overwrite_keeps_identity_and_clears_omitted_fields() {
        let stored = Model {
            id: 7,
            name: Some("Ann".into()),
            location: Some("NY".into()),
            department: Some("Eng".into()),
        };
        let mut draft = Draft::from(stored);
        draft.overwrite(EmployeeFields {
            name: Some("Ann".into()),
            location: Some("SF".into()),
            department: None,
        });
        assert_eq!(draft.id, Some(7));
        assert_eq!(draft.location.as_deref(), Some("SF"));
        assert_eq!(draft.department, None);
    }
}
