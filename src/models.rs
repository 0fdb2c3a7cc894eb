//! View models exchanged at the service boundary.
//!
//! [`EmployeeModel`] mirrors the persistence entity field for field so the
//! database schema can evolve independently of callers. Conversions are
//! explicit `From` implementations rather than a reflective mapping layer:
//! adding or renaming a field on either side breaks the build instead of
//! silently dropping data.

use serde::{Deserialize, Serialize};

use crate::entities::employee;

/// Boundary-facing employee record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeModel {
    pub id: i32,
    pub name: String,
    pub email_id: String,
}

impl From<employee::Model> for EmployeeModel {
    fn from(entity: employee::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email_id: entity.email_id,
        }
    }
}

impl From<EmployeeModel> for employee::Model {
    fn from(model: EmployeeModel) -> Self {
        Self {
            id: model.id,
            name: model.name,
            email_id: model.email_id,
        }
    }
}

/// Map a batch of entities into view models.
pub fn to_models<I>(entities: I) -> Vec<EmployeeModel>
where
    I: IntoIterator<Item = employee::Model>,
{
    entities.into_iter().map(EmployeeModel::from).collect()
}

/// Map a batch of view models into entities.
pub fn to_entities<I>(models: I) -> Vec<employee::Model>
where
    I: IntoIterator<Item = EmployeeModel>,
{
    models.into_iter().map(employee::Model::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_model() -> EmployeeModel {
        EmployeeModel {
            id: 1,
            name: "test1".to_string(),
            email_id: "test1@gmail.com".to_string(),
        }
    }

    #[test]
    fn model_round_trips_through_entity() {
        let model = sample_model();
        let entity: employee::Model = model.clone().into();
        let back: EmployeeModel = entity.into();

        assert_eq!(back, model);
    }

    #[test]
    fn entity_round_trips_through_model() {
        let entity = employee::Model {
            id: 42,
            name: "test2".to_string(),
            email_id: "test2@gmail.com".to_string(),
        };

        let model: EmployeeModel = entity.clone().into();
        let back: employee::Model = model.into();

        assert_eq!(back, entity);
    }

    #[test]
    fn batch_mapping_preserves_order_and_fields() {
        let entities = vec![
            employee::Model {
                id: 1,
                name: "test1".to_string(),
                email_id: "test1@gmail.com".to_string(),
            },
            employee::Model {
                id: 2,
                name: "test2".to_string(),
                email_id: "test2@gmail.com".to_string(),
            },
        ];

        let models = to_models(entities.clone());
        assert_eq!(models.len(), 2);
        assert_eq!(models[0].id, 1);
        assert_eq!(models[1].email_id, "test2@gmail.com");

        let back = to_entities(models);
        assert_eq!(back, entities);
    }

    #[test]
    fn model_serializes_with_snake_case_fields() {
        let json = serde_json::to_value(sample_model()).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["name"], "test1");
        assert_eq!(json["email_id"], "test1@gmail.com");
    }
}
