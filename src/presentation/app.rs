//! Command dispatch for the `dispensa` CLI.

use std::io::Write;
use std::sync::Arc;

use color_eyre::eyre::{Result, WrapErr, bail};
use tracing::{debug, info, warn};

use super::render;
use crate::application::dto::{RemoveOutcome, SessionStatus};
use crate::application::services::ExpiryDashboard;
use crate::application::use_cases::{
    AuthUseCase, LabelBoard, LabelRegistry, LabelResource, ProfileUseCase, ResolveSessionUseCase,
};
use crate::domain::entities::{Credentials, LabelKind, ProfileChanges, Registration};
use crate::domain::ports::{AccountPort, TokenStoragePort};
use crate::infrastructure::config::{
    AppConfig, Command, HomeArgs, LabelsCommand, LoginArgs, ProfileCommand, RegisterArgs,
};
use crate::infrastructure::{ApiClient, HttpAccountClient, RestResource, TerminalPrompt, load_items};

/// Wires the adapters together and runs one command.
pub struct App {
    config: AppConfig,
    client: Arc<ApiClient>,
    prompt: TerminalPrompt,
    auth: AuthUseCase,
    session: ResolveSessionUseCase,
    profile: ProfileUseCase,
}

impl App {
    /// Builds the HTTP client and use cases on top of `storage`.
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be created.
    pub fn new(
        config: AppConfig,
        storage: Arc<dyn TokenStoragePort>,
        prompt: TerminalPrompt,
    ) -> Result<Self> {
        let client = Arc::new(ApiClient::with_config(
            config.api_url.clone(),
            config.request_timeout(),
            storage.clone(),
        )?);
        let account: Arc<dyn AccountPort> = Arc::new(HttpAccountClient::new(client.clone()));

        Ok(Self {
            auth: AuthUseCase::new(account.clone(), storage.clone()),
            session: ResolveSessionUseCase::new(account.clone(), storage),
            profile: ProfileUseCase::new(
                account,
                config.profile.retry_delay(),
                config.profile.max_attempts,
            ),
            config,
            client,
            prompt,
        })
    }

    /// # Errors
    /// Returns the error of the failed step; the message is meant for the user.
    pub async fn run(&self, command: Command, out: &mut impl Write) -> Result<()> {
        debug!("Running command");
        match command {
            Command::Login(args) => self.login(args, out).await,
            Command::Register(args) => self.register(args, out).await,
            Command::Logout => self.logout(out).await,
            Command::Status => self.status(out).await,
            Command::Labels(cmd) => self.labels(cmd, out).await,
            Command::Profile(cmd) => self.profile(cmd, out).await,
            Command::Home(args) => self.home(args, out).await,
        }
    }

    fn password(&self, given: Option<String>) -> Result<String> {
        match given {
            Some(password) => Ok(password),
            None => self
                .prompt
                .read_secret("Password")
                .wrap_err("failed to read password"),
        }
    }

    async fn login(&self, args: LoginArgs, out: &mut impl Write) -> Result<()> {
        let password = self.password(args.password)?;
        let outcome = self
            .auth
            .login(Credentials::new(args.email, password))
            .await?;
        write!(out, "{}", render::auth_outcome(&outcome))?;
        Ok(())
    }

    async fn register(&self, args: RegisterArgs, out: &mut impl Write) -> Result<()> {
        let password = self.password(args.password)?;
        let mut registration = Registration::new(args.email, password, args.username, args.surname);
        if let Some(phone) = args.phone {
            registration = registration.with_phone(phone);
        }
        let outcome = self.auth.register(registration).await?;
        write!(out, "{}", render::auth_outcome(&outcome))?;
        Ok(())
    }

    async fn logout(&self, out: &mut impl Write) -> Result<()> {
        if self.auth.logout(&self.prompt).await? {
            writeln!(out, "Logged out")?;
        } else {
            writeln!(out, "Logout cancelled")?;
        }
        Ok(())
    }

    async fn status(&self, out: &mut impl Write) -> Result<()> {
        let status = match self.session.execute(true).await {
            Ok(status) => status,
            Err(e) if e.is_network_error() => {
                warn!(error = %e, "Could not verify session");
                self.session.execute(false).await?
            }
            Err(e) => return Err(e.into()),
        };
        write!(out, "{}", render::session(&status))?;
        Ok(())
    }

    fn board(&self) -> LabelBoard {
        let client = self.client.clone();
        LabelBoard::new(LabelRegistry::from_fn(|kind| {
            Arc::new(RestResource::for_labels(client.clone(), kind)) as LabelResource
        }))
    }

    async fn labels(&self, command: LabelsCommand, out: &mut impl Write) -> Result<()> {
        let mut board = self.board();
        match command {
            LabelsCommand::List { category } => {
                board.load_all().await?;
                let kinds = category.map_or_else(|| LabelKind::ALL.to_vec(), |kind| vec![kind]);
                for kind in kinds {
                    write!(out, "{}", render::labels(kind, board.labels(kind)))?;
                }
            }
            LabelsCommand::Add { category, name } => {
                let label = board.save(category, &name, None).await?;
                writeln!(out, "Created {} ({})", label.name(), label.id())?;
            }
            LabelsCommand::Rename { category, id, name } => {
                let label = board.save(category, &name, Some(&id)).await?;
                writeln!(out, "Renamed {} to {}", label.id(), label.name())?;
            }
            LabelsCommand::Remove { category, id } => {
                match board.remove(category, &id, &self.prompt).await? {
                    RemoveOutcome::Removed => writeln!(out, "Deleted {id}")?,
                    RemoveOutcome::Declined => writeln!(out, "Nothing deleted")?,
                }
            }
        }
        Ok(())
    }

    async fn profile(&self, command: ProfileCommand, out: &mut impl Write) -> Result<()> {
        match command {
            ProfileCommand::Show => {
                let user = self.profile.fetch().await?;
                write!(out, "{}", render::profile(&user))?;
            }
            ProfileCommand::Update {
                name,
                surname,
                email,
                phone,
            } => {
                let changes = ProfileChanges {
                    name,
                    surname,
                    email,
                    phone_number: phone,
                };
                if changes.is_empty() {
                    bail!("nothing to update, pass at least one field");
                }
                let current = self.profile.fetch().await?;
                let saved = self.profile.update(&current, changes).await?;
                writeln!(out, "Profile updated")?;
                write!(out, "{}", render::profile(&saved))?;
            }
        }
        Ok(())
    }

    async fn home(&self, args: HomeArgs, out: &mut impl Write) -> Result<()> {
        let Some(path) = args
            .items
            .or_else(|| self.config.dashboard.items_path.clone())
        else {
            bail!("no items file, pass --items or set dashboard.items_path");
        };
        let window = args
            .window
            .unwrap_or(self.config.dashboard.expiry_window_days);

        let items = load_items(&path).await?;
        let today = chrono::Local::now().date_naive();
        let entries = ExpiryDashboard::new(window).expiring(&items, today);
        info!(total = items.len(), expiring = entries.len(), "Dashboard computed");

        write!(out, "{}", render::dashboard(&entries, window))?;
        Ok(())
    }

    /// Session state without contacting the server.
    ///
    /// # Errors
    /// Never fails in practice; storage errors read as logged out.
    pub async fn session_status(&self) -> Result<SessionStatus> {
        Ok(self.session.execute(false).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::AuthToken;
    use crate::infrastructure::MemoryTokenStorage;
    use crate::infrastructure::api::test_server::{StubResponse, StubServer};

    async fn app(server: &StubServer, token: Option<&str>) -> (App, Arc<MemoryTokenStorage>) {
        app_with_prompt(server, token, TerminalPrompt::new(true)).await
    }

    async fn app_with_prompt(
        server: &StubServer,
        token: Option<&str>,
        prompt: TerminalPrompt,
    ) -> (App, Arc<MemoryTokenStorage>) {
        let storage = Arc::new(MemoryTokenStorage::new());
        if let Some(token) = token {
            storage
                .store_token(&AuthToken::new_unchecked(token))
                .await
                .unwrap();
        }
        let config = AppConfig {
            api_url: server.base_url(),
            ..AppConfig::default()
        };
        let app = App::new(config, storage.clone(), prompt).unwrap();
        (app, storage)
    }

    async fn run(app: &App, command: Command) -> Result<String> {
        let mut out = Vec::new();
        app.run(command, &mut out).await?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[tokio::test]
    async fn test_login_stores_token() {
        let mut responses = vec![StubResponse::json(200, r#"{"token":"abc.def.ghi"}"#)];
        responses.extend(vec![StubResponse::json(200, "[]"); 4]);
        let server = StubServer::start(responses).await;
        let (app, storage) = app(&server, None).await;

        let out = run(
            &app,
            Command::Login(LoginArgs {
                email: "anna@example.com".to_string(),
                password: Some("secret".to_string()),
            }),
        )
        .await
        .unwrap();

        assert_eq!(out, "Successful login\n");
        let token = storage.get_token().await.unwrap().unwrap();
        assert_eq!(token.as_str(), "abc.def.ghi");

        run(&app, Command::Labels(LabelsCommand::List { category: None }))
            .await
            .unwrap();

        let requests = server.requests().await;
        assert_eq!(requests[0].path, "/users/login");
        assert_eq!(requests.len(), 5);
        for request in &requests[1..] {
            assert_eq!(request.header("authorization"), Some("Bearer abc.def.ghi"));
        }
    }

    #[tokio::test]
    async fn test_login_reads_password_without_flag() {
        let server = StubServer::start(vec![StubResponse::json(200, r#"{"token":"abc.def.ghi"}"#)]).await;
        let (app, _) = app_with_prompt(&server, None, TerminalPrompt::typing(true, "secret")).await;

        let out = run(
            &app,
            Command::Login(LoginArgs {
                email: "anna@example.com".to_string(),
                password: None,
            }),
        )
        .await
        .unwrap();

        assert_eq!(out, "Successful login\n");
        assert_eq!(
            server.requests().await[0].header("authorization"),
            Some("Basic YW5uYUBleGFtcGxlLmNvbTpzZWNyZXQ=")
        );
    }

    #[tokio::test]
    async fn test_labels_list_prints_every_category() {
        let body = r#"[{"_id":"a1","name":"Fridge"}]"#;
        let server = StubServer::start(vec![StubResponse::json(200, body); 4]).await;
        let (app, _) = app(&server, Some("tok")).await;

        let out = run(&app, Command::Labels(LabelsCommand::List { category: None }))
            .await
            .unwrap();

        for kind in LabelKind::ALL {
            assert!(out.contains(&format!("{} (1)", kind.title())));
        }
        assert_eq!(server.requests().await.len(), 4);
    }

    #[tokio::test]
    async fn test_labels_add_posts_name() {
        let server = StubServer::start(vec![StubResponse::json(
            201,
            r#"{"_id":"abc","name":"Dairy"}"#,
        )])
        .await;
        let (app, _) = app(&server, Some("tok")).await;

        let out = run(
            &app,
            Command::Labels(LabelsCommand::Add {
                category: LabelKind::FoodGroups,
                name: "Dairy".to_string(),
            }),
        )
        .await
        .unwrap();

        assert_eq!(out, "Created Dairy (abc)\n");
        let requests = server.requests().await;
        assert_eq!(requests[0].method, "POST");
        assert_eq!(requests[0].path, "/foodGroups");
        assert_eq!(requests[0].header("authorization"), Some("Bearer tok"));
    }

    #[tokio::test]
    async fn test_expired_session_clears_token() {
        let server = StubServer::start(vec![StubResponse::json(401, r#"{"message":"jwt expired"}"#)]).await;
        let (app, storage) = app(&server, Some("tok")).await;

        let out = run(&app, Command::Status).await.unwrap();

        assert_eq!(out, "Not logged in\n");
        assert!(!storage.has_token().await.unwrap());
    }

    #[tokio::test]
    async fn test_profile_update_requires_a_field() {
        let server = StubServer::start(vec![]).await;
        let (app, _) = app(&server, Some("tok")).await;

        let result = run(
            &app,
            Command::Profile(ProfileCommand::Update {
                name: None,
                surname: None,
                email: None,
                phone: None,
            }),
        )
        .await;

        assert!(result.is_err());
        assert!(server.requests().await.is_empty());
    }

    #[tokio::test]
    async fn test_home_without_items_file_fails() {
        let server = StubServer::start(vec![]).await;
        let (app, _) = app(&server, None).await;

        let result = run(&app, Command::Home(HomeArgs { items: None, window: None })).await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_logout_with_assumed_yes() {
        let server = StubServer::start(vec![]).await;
        let (app, storage) = app(&server, Some("tok")).await;

        let out = run(&app, Command::Logout).await.unwrap();

        assert_eq!(out, "Logged out\n");
        assert!(!storage.has_token().await.unwrap());
        assert!(!app.session_status().await.unwrap().is_logged_in());
    }
}
