use member_registry::{
    app_state::{AppState, MemberStoreType},
    get_postgres_pool,
    services::{data_stores::PostgresMemberStore, MemberService},
    utils::constants::{test, DATABASE_URL},
    Application,
};
use reqwest::{redirect::Policy, Response, StatusCode};
use secrecy::{ExposeSecret, Secret};
use sqlx::{
    postgres::{PgConnectOptions, PgConnection, PgPoolOptions},
    Connection, Executor, PgPool,
};
use std::{str::FromStr, sync::Arc};
use test_context::AsyncTestContext;
use uuid::Uuid;

pub struct TestApp {
    pub address: String,
    pub http_client: reqwest::Client,
    pub member_store: MemberStoreType,
    pub tmp_db_name: String,
}

impl TestApp {
    pub async fn new() -> Self {
        let tmp_db_name = Uuid::new_v4().to_string();
        let pg_pool = configure_postgresql(&tmp_db_name).await;
        let member_store: MemberStoreType =
            Arc::new(PostgresMemberStore::new(pg_pool));
        let member_service = Arc::new(MemberService::new(member_store.clone()));

        let app_state = AppState::new(member_service);

        let app = Application::build(app_state, test::APP_ADDRESS)
            .await
            .expect("Failed to build app");
        let address = format!("http://{}", app.address.clone());

        #[allow(clippy::let_underscore_future)]
        let _ = tokio::spawn(app.run());

        let http_client = reqwest::Client::builder()
            .redirect(Policy::none())
            .build()
            .unwrap();

        Self {
            address,
            http_client,
            member_store,
            tmp_db_name,
        }
    }

    pub async fn get_home(&self) -> reqwest::Response {
        self.http_client
            .get(format!("{}/", &self.address))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get_create_member_form(&self) -> reqwest::Response {
        self.http_client
            .get(format!("{}/members/new", &self.address))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_create_member<Body>(&self, form: &Body) -> reqwest::Response
    where
        Body: serde::Serialize + ?Sized,
    {
        self.http_client
            .post(format!("{}/members/new", &self.address))
            .form(form)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get_members(&self) -> reqwest::Response {
        self.http_client
            .get(format!("{}/members", &self.address))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get_member(&self, member_id: &str) -> reqwest::Response {
        self.http_client
            .get(format!("{}/members/{}", &self.address, member_id))
            .send()
            .await
            .expect("Failed to execute request")
    }
}

impl AsyncTestContext for TestApp {
    async fn setup() -> TestApp {
        TestApp::new().await
    }

    async fn teardown(self) {
        delete_database(&self.tmp_db_name).await;
    }
}

async fn configure_postgresql(db_name: &str) -> PgPool {
    let postgresql_conn_url = DATABASE_URL.to_owned();

    configure_database(&postgresql_conn_url, db_name).await;

    let postgresql_conn_url_with_db = Secret::new(format!(
        "{}/{}",
        postgresql_conn_url.expose_secret(),
        db_name
    ));

    get_postgres_pool(&postgresql_conn_url_with_db)
        .await
        .expect("Failed to create Postgres connection pool!")
}

async fn configure_database(db_conn_string: &Secret<String>, db_name: &str) {
    let connection = PgPoolOptions::new()
        .connect(db_conn_string.expose_secret())
        .await
        .expect("Failed to create Postgres connection pool.");

    connection
        .execute(format!(r#"CREATE DATABASE "{}";"#, db_name).as_str())
        .await
        .expect("Failed to create database.");

    let db_conn_string =
        format!("{}/{}", db_conn_string.expose_secret(), db_name);

    let connection = PgPoolOptions::new()
        .connect(&db_conn_string)
        .await
        .expect("Failed to create Postgres connection pool.");

    sqlx::migrate!()
        .run(&connection)
        .await
        .expect("Failed to migrate the database");
}

async fn delete_database(db_name: &str) {
    let postgresql_conn_url: String = DATABASE_URL.expose_secret().to_owned();

    let connection_options = PgConnectOptions::from_str(&postgresql_conn_url)
        .expect("Failed to parse PostgreSQL connection string");

    let mut connection = PgConnection::connect_with(&connection_options)
        .await
        .expect("Failed to connect to Postgres");

    // Kill any active connections to the database
    connection
        .execute(
            format!(
                r#"
                SELECT pg_terminate_backend(pg_stat_activity.pid)
                FROM pg_stat_activity
                WHERE pg_stat_activity.datname = '{}'
                  AND pid <> pg_backend_pid();
        "#,
                db_name
            )
            .as_str(),
        )
        .await
        .expect("Failed to drop the database.");

    connection
        .execute(format!(r#"DROP DATABASE "{}";"#, db_name).as_str())
        .await
        .expect("Failed to drop the database.");
}

pub fn get_random_name() -> String {
    format!("member-{}", Uuid::new_v4())
}

pub async fn create_member(app: &mut TestApp, name: &str) {
    let response = app.post_create_member(&[("name", name)]).await;

    assert_eq!(
        response.status(),
        StatusCode::SEE_OTHER,
        "Failed to create member with name: {name}"
    );
}

pub async fn get_body(response: Response) -> String {
    response
        .text()
        .await
        .expect("Failed to read response body")
}
