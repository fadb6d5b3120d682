mod test_utils;

#[cfg(test)]
mod tests {
    use std::env;

    use axum::{
        body::Body,
        http::{Request, StatusCode, header},
    };
    use serial_test::serial;
    use tower::util::ServiceExt;

    use maya::ai::chat::SessionStore;
    use maya::api::reset_db;
    use maya::chat::{find_all_chat_records, insert_chat_record};
    use maya::core::db::async_db;
    use maya::core::{AppConfig, MAYA_INSTRUCTIONS};
    use maya::gemini::{Content, Role};

    use crate::test_utils::{body_to_string, test_app};

    #[tokio::test]
    async fn it_serves_static_assets() {
        let server = mockito::Server::new_async().await;
        let (app, _state) = test_app(&server.url()).await;

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/static/style.css")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CACHE_CONTROL], "no-cache");
        let body = body_to_string(response.into_body()).await;
        assert!(body.contains(".chat-form"));
    }

    #[tokio::test]
    async fn it_clears_chat_log_on_startup() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("instance").join("database.db");
        let db_path = db_path.to_str().unwrap();

        // First run saves a couple of exchanges
        let db = async_db(db_path).await.unwrap();
        assert_eq!(reset_db(&db).await.unwrap(), 0);
        insert_chat_record(&db, "Hello", "Hi!").await.unwrap();
        insert_chat_record(&db, "Bye", "See you!").await.unwrap();
        drop(db);

        // Second run starts with an empty log and fresh conversations
        let db = async_db(db_path).await.unwrap();
        assert_eq!(reset_db(&db).await.unwrap(), 2);
        assert!(find_all_chat_records(&db).await.unwrap().is_empty());

        let sessions = SessionStore::new("You are Maya.");
        let transcript = sessions.get_or_create("returning-visitor");
        let transcript = transcript.lock().await;
        assert_eq!(transcript.len(), 2);
        assert_eq!(
            transcript.messages()[0],
            Content::new(Role::User, "You are Maya.")
        );
    }

    fn clear_env() {
        for key in [
            "GEMINI_KEY",
            "MAYA_MODEL",
            "MAYA_TEMPERATURE",
            "MAYA_API_HOSTNAME",
            "MAYA_STORAGE_PATH",
            "MAYA_SYSTEM_MESSAGE",
        ] {
            unsafe { env::remove_var(key) };
        }
    }

    #[test]
    #[serial]
    fn it_builds_config_from_env() {
        clear_env();
        unsafe {
            env::set_var("GEMINI_KEY", "secret");
            env::set_var("MAYA_MODEL", "gemini-2.0-flash");
            env::set_var("MAYA_TEMPERATURE", "0.2");
            env::set_var("MAYA_STORAGE_PATH", "/tmp/maya/");
        }

        let config = AppConfig::from_env().unwrap();
        clear_env();

        assert_eq!(config.gemini_api_key, "secret");
        assert_eq!(config.gemini_model, "gemini-2.0-flash");
        assert_eq!(config.temperature, 0.2);
        assert_eq!(config.db_path, "/tmp/maya/instance/database.db");
        assert_eq!(
            config.gemini_api_hostname,
            "https://generativelanguage.googleapis.com"
        );
        assert_eq!(config.system_message, MAYA_INSTRUCTIONS);
    }

    #[test]
    #[serial]
    fn it_uses_defaults() {
        clear_env();
        unsafe { env::set_var("GEMINI_KEY", "secret") };

        let config = AppConfig::from_env().unwrap();
        clear_env();

        assert_eq!(config.gemini_model, "gemini-1.5-flash");
        assert_eq!(config.temperature, 0.7);
        assert_eq!(config.db_path, "./instance/database.db");
    }

    #[test]
    #[serial]
    fn it_requires_the_api_key() {
        clear_env();
        let err = AppConfig::from_env().unwrap_err();
        assert!(err.to_string().contains("GEMINI_KEY"));
    }

    #[test]
    #[serial]
    fn it_rejects_invalid_temperature() {
        clear_env();
        unsafe {
            env::set_var("GEMINI_KEY", "secret");
            env::set_var("MAYA_TEMPERATURE", "3");
        }
        let result = AppConfig::from_env();
        clear_env();
        assert!(result.is_err());
    }
}
