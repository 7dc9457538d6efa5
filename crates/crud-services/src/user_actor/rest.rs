//! JSON binding for users: `nombre`, `email` and `rol` are required on create, `telefono`
//! defaults to empty, and `activo` can only be changed by an update.

use crate::http::RestResource;
use crate::model::{User, UserCreate, UserFilter, UserUpdate};
use crate::validation::{FieldReader, JsonObject, ValidationError};

impl RestResource for User {
    const LABEL: &'static str = "Usuario";
    const FILTERS: &'static [&'static str] = &["rol"];

    fn create_from_json(body: &JsonObject) -> Result<UserCreate, ValidationError> {
        let mut reader = FieldReader::create(body);
        let name = reader.required_text("nombre");
        let email = reader.required_email("email");
        let phone = reader.optional_text("telefono");
        let role = reader.required_text("rol");
        reader.finish(|| {
            Some(UserCreate {
                name: name?,
                email: email?,
                phone: phone.unwrap_or_default(),
                role: role?,
            })
        })
    }

    fn update_from_json(body: &JsonObject) -> Result<UserUpdate, ValidationError> {
        let mut reader = FieldReader::update(body);
        let update = UserUpdate {
            name: reader.optional_text("nombre"),
            email: reader.optional_email("email"),
            phone: reader.optional_text("telefono"),
            role: reader.optional_text("rol"),
            active: reader.optional_flag("activo"),
        };
        reader.finish(|| Some(update))
    }

    fn filter_for(keyword: &str, value: &str) -> Option<UserFilter> {
        match keyword {
            "rol" => Some(UserFilter::Role(value.to_string())),
            _ => None,
        }
    }
}
