use crate::controller::Controller;
use crate::form::FormState;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub controller: Arc<Controller>,
    pub form: Arc<Mutex<FormState>>,
}

impl AppState {
    pub fn new(controller: Controller) -> Self {
        Self {
            controller: Arc::new(controller),
            form: Arc::new(Mutex::new(FormState::default())),
        }
    }
}
