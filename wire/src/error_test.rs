use super::*;

#[test]
fn status_401_maps_to_unauthorized() {
    assert_eq!(ApiError::from_status(401, None), ApiError::Unauthorized);
}

#[test]
fn status_429_maps_to_rate_limited() {
    assert_eq!(ApiError::from_status(429, None), ApiError::RateLimited);
}

#[test]
fn other_statuses_map_to_request_failed_with_detail() {
    assert_eq!(
        ApiError::from_status(500, Some("Error procesando CSV".to_owned())),
        ApiError::RequestFailed {
            detail: Some("Error procesando CSV".to_owned())
        }
    );
    assert_eq!(
        ApiError::from_status(400, None),
        ApiError::RequestFailed { detail: None }
    );
}

#[test]
fn detail_is_dropped_for_mapped_statuses() {
    assert_eq!(
        ApiError::from_status(401, Some("Token inválido o no autorizado".to_owned())),
        ApiError::Unauthorized
    );
}

#[test]
fn user_messages_cover_every_kind() {
    assert_eq!(
        ApiError::TokenRequired.user_message(Operation::Preview),
        "Debes introducir un token de acceso primero"
    );
    assert_eq!(
        ApiError::InvalidFileType.user_message(Operation::Preview),
        "Solo se aceptan archivos CSV"
    );
    assert_eq!(ApiError::Unauthorized.user_message(Operation::Analyze), "No autorizado");
    assert_eq!(
        ApiError::RateLimited.user_message(Operation::Preview),
        "Demasiadas peticiones, intenta más tarde"
    );
}

#[test]
fn generic_failure_message_depends_on_operation() {
    let error = ApiError::RequestFailed { detail: None };
    assert_eq!(error.user_message(Operation::Preview), "Error al cargar preview");
    assert_eq!(error.user_message(Operation::Analyze), "Error en el análisis");
}

#[test]
fn generic_failure_prefers_backend_detail() {
    let error = ApiError::RequestFailed {
        detail: Some("CSV vacío".to_owned()),
    };
    assert_eq!(error.user_message(Operation::Preview), "CSV vacío");
}

#[test]
fn display_includes_detail_when_present() {
    let error = ApiError::RequestFailed {
        detail: Some("boom".to_owned()),
    };
    assert_eq!(error.to_string(), "request failed: boom");
}
