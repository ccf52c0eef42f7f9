use serde::Deserialize;

use crate::integration::integrator::Integrator;
use crate::manager::manager::Manager;
use crate::manager::managererror::ManagerError;

#[derive(Deserialize)]
struct IntegratorJsonProp {
    sum_type: String,
    num_steps: i64,
    function: i64
}

// Presets go through Integrator::new so that a file cannot smuggle in a
// configuration the shell would have rejected.
fn get_integrator_from_json(json_value: serde_json::Value) -> Result<Integrator, ManagerError> {
    let json_prop: IntegratorJsonProp = ManagerError::from_json_or_json_parse_error(json_value)?;
    let integrator = Integrator::new(&json_prop.sum_type, json_prop.num_steps, json_prop.function)?;
    Ok(integrator)
}

pub struct IntegratorManager;

impl IntegratorManager {
    pub fn new() -> Manager<Integrator> {
        Manager::new(get_integrator_from_json)
    }
}
