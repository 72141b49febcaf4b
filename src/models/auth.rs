use serde::{Deserialize, Serialize};

/// Identidad del usuario autenticado (lo único que el cliente conoce)
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Identity {
    pub display_name: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Respuesta del endpoint de login: solo nos interesa el token de acceso
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginResponse {
    pub access: String,
}
