//! Integration tests for the chat API endpoints

mod test_utils;

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::util::ServiceExt;

    use maya::api::public::chat::ChatHistoryResponse;
    use maya::chat::insert_chat_record;

    use crate::test_utils::{body_to_string, test_app};

    /// Tests the history is empty for a fresh app
    #[tokio::test]
    async fn it_gets_empty_chat_history() {
        let server = mockito::Server::new_async().await;
        let (app, _state) = test_app(&server.url()).await;

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/chat/history")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = body_to_string(response.into_body()).await;
        assert_eq!(body, r#"{"records":[]}"#);
    }

    /// Tests records are returned in the order they were saved
    #[tokio::test]
    async fn it_gets_chat_history_in_order() {
        let server = mockito::Server::new_async().await;
        let (app, state) = test_app(&server.url()).await;

        let db = state.read().unwrap().db.clone();
        insert_chat_record(&db, "Hello", "Hi! How can I help?")
            .await
            .unwrap();
        insert_chat_record(&db, "What is **2 + 2**?", "4")
            .await
            .unwrap();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/chat/history")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = body_to_string(response.into_body()).await;
        let history: ChatHistoryResponse = serde_json::from_str(&body).unwrap();
        assert_eq!(history.records.len(), 2);
        assert_eq!(history.records[0].user_message, "Hello");
        assert_eq!(history.records[0].maya_response, "Hi! How can I help?");
        // Stored text is returned as-is, rendering only happens in the page
        assert_eq!(history.records[1].user_message, "What is **2 + 2**?");
        assert!(history.records[0].id < history.records[1].id);
    }
}
