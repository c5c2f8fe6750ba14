use vitalis_core::errors::*;

#[test]
fn prediction_error_server_error_carries_status() {
    let err = PredictionError::ServerError { status: 500 };
    assert!(
        err.to_string().contains("500"),
        "error should contain the status code"
    );
}

#[test]
fn prediction_error_transport_failure_carries_reason() {
    let err = PredictionError::TransportFailure {
        reason: "connection refused".into(),
    };
    assert!(err.to_string().contains("connection refused"));
}

#[test]
fn prediction_error_invalid_shape_carries_reason() {
    let err = PredictionError::InvalidResponseShape {
        reason: "no prediction field".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("malformed"));
    assert!(msg.contains("no prediction field"));
}

#[test]
fn store_error_not_found_carries_collection_and_id() {
    let err = StoreError::RecordNotFound {
        collection: "patients".into(),
        id: "abc-123".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("patients"));
    assert!(msg.contains("abc-123"));
}

#[test]
fn upload_error_rejected_carries_reason() {
    let err = UploadError::Rejected {
        reason: "file too large".into(),
    };
    assert!(err.to_string().contains("file too large"));
}

// --- From impls ---

#[test]
fn prediction_error_converts_to_vitalis_error() {
    let pred_err = PredictionError::ServerError { status: 503 };
    let err: VitalisError = pred_err.into();
    assert!(matches!(err, VitalisError::Prediction(_)));
}

#[test]
fn store_error_converts_to_vitalis_error() {
    let store_err = StoreError::Backend {
        message: "timeout".into(),
    };
    let err: VitalisError = store_err.into();
    assert!(matches!(err, VitalisError::Store(_)));
}

#[test]
fn chat_error_converts_to_vitalis_error() {
    let chat_err = ChatError::NoPatientSelected;
    let err: VitalisError = chat_err.into();
    assert!(matches!(err, VitalisError::Chat(_)));
}

#[test]
fn serialization_error_converts_to_vitalis_error() {
    let json_err = serde_json::from_str::<String>("not valid json").unwrap_err();
    let err: VitalisError = json_err.into();
    assert!(matches!(err, VitalisError::Serialization(_)));
}

#[test]
fn umbrella_message_preserves_sub_error_text() {
    let err: VitalisError = PredictionError::TransportFailure {
        reason: "dns failure".into(),
    }
    .into();
    assert!(err.to_string().contains("dns failure"));
}
