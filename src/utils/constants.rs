/// URL base por defecto (servicio local, sin barra final)
/// BACKEND_URL en tiempo de compilación la reemplaza (ver config.rs)
pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:8000";

// Endpoints
pub const DRONES_STATUS_PATH: &str = "/drones/status";
pub const MISSIONS_PATH: &str = "/missions/";
pub const SCHEDULES_PATH: &str = "/schedules/";

// Mensajes fijos mostrados al usuario
pub const SCHEDULE_SUCCESS_MESSAGE: &str = "Drone scheduled successfully!";
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred.";
pub const DRONES_LOAD_ERROR: &str = "Could not load drones.";
pub const MISSIONS_LOAD_ERROR: &str = "Could not load missions.";

// Textos del formulario
pub const PAGE_TITLE: &str = "Schedule a Drone";
pub const DRONE_LABEL: &str = "Available Drones:";
pub const DRONE_PLACEHOLDER: &str = "Select a Drone";
pub const MISSION_LABEL: &str = "Choose Your Mission:";
pub const MISSION_PLACEHOLDER: &str = "Select a Mission";
pub const START_LABEL: &str = "Start Date and Time:";
pub const END_LABEL: &str = "End Date and Time:";
pub const SUBMIT_LABEL: &str = "Schedule Drone";
