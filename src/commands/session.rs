//! Shell session: paging cursors, the caught-Pokémon table, and command handlers.

use std::collections::BTreeMap;
use std::io::Write;

use tracing::debug;

use crate::client::FetchClient;
use crate::commands::{parse_input, Command, Endpoints};
use crate::error::{CommandError, Result};
use crate::models::{LocationArea, LocationAreaPage, Pokemon};

/// What the shell loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// State carried between commands of one interactive session.
pub struct Session {
    client: FetchClient,
    endpoints: Endpoints,
    next_page: Option<String>,
    previous_page: Option<String>,
    pokedex: BTreeMap<String, Pokemon>,
    roll: Box<dyn FnMut() -> f64 + Send>,
}

impl Session {
    /// Starts a session at the first page of location areas.
    pub fn new(client: FetchClient, endpoints: Endpoints) -> Self {
        Self {
            next_page: Some(endpoints.first_location_page()),
            previous_page: None,
            client,
            endpoints,
            pokedex: BTreeMap::new(),
            roll: Box::new(rand::random::<f64>),
        }
    }

    /// Replaces the uniform `[0, 1)` source used by `catch`.
    pub fn with_roll(mut self, roll: impl FnMut() -> f64 + Send + 'static) -> Self {
        self.roll = Box::new(roll);
        self
    }

    /// Names of caught Pokémon, sorted.
    pub fn caught(&self) -> impl Iterator<Item = &str> {
        self.pokedex.keys().map(String::as_str)
    }

    // == Execute ==
    /// Parses and runs one input line, writing user-facing output to `out`.
    ///
    /// Blank lines do nothing.
    pub async fn execute<W: Write>(&mut self, line: &str, out: &mut W) -> Result<Flow> {
        let words = parse_input(line);
        let Some((name, args)) = words.split_first() else {
            return Ok(Flow::Continue);
        };
        let command = Command::from_name(name).ok_or(CommandError::UnknownCommand)?;
        let arg = args.first().map(String::as_str);

        debug!(command = command.name(), ?arg, "Running command");
        match command {
            Command::Help => self.help(out)?,
            Command::Map => self.map(out).await?,
            Command::MapBack => self.map_back(out).await?,
            Command::Explore => self.explore(arg, out).await?,
            Command::Catch => self.catch(arg, out).await?,
            Command::Inspect => self.inspect(arg, out)?,
            Command::Pokedex => self.list_pokedex(out)?,
            Command::Exit => {
                writeln!(out, "Closing the Pokedex... Goodbye!")?;
                return Ok(Flow::Exit);
            }
        }

        Ok(Flow::Continue)
    }

    fn help<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "Welcome to the Pokedex!")?;
        writeln!(out, "Usage:")?;
        writeln!(out)?;
        for command in Command::ALL {
            writeln!(out, "{}: {}", command.name(), command.description())?;
        }
        Ok(())
    }

    async fn map<W: Write>(&mut self, out: &mut W) -> Result<()> {
        match self.next_page.clone() {
            Some(url) => self.show_page(&url, out).await,
            None => {
                writeln!(out, "No next page")?;
                Ok(())
            }
        }
    }

    async fn map_back<W: Write>(&mut self, out: &mut W) -> Result<()> {
        match self.previous_page.clone() {
            Some(url) => self.show_page(&url, out).await,
            None => {
                writeln!(out, "No previous page")?;
                Ok(())
            }
        }
    }

    /// Prints one listing page and moves the cursors to its neighbours.
    ///
    /// Cursors are left alone if the fetch or decode fails.
    async fn show_page<W: Write>(&mut self, url: &str, out: &mut W) -> Result<()> {
        let body = self.client.fetch_cached(url).await?;
        let page: LocationAreaPage = serde_json::from_slice(&body)?;

        self.next_page = page.next;
        self.previous_page = page.previous;

        for area in &page.results {
            writeln!(out, "{}", area.name)?;
        }
        Ok(())
    }

    async fn explore<W: Write>(&mut self, area: Option<&str>, out: &mut W) -> Result<()> {
        let area = area.ok_or(CommandError::MissingArgument("No location area provided"))?;
        writeln!(out, "Exploring {}...", area)?;

        let body = self
            .client
            .fetch_cached(&self.endpoints.location_area(area))
            .await?;
        let details: LocationArea = serde_json::from_slice(&body)?;

        writeln!(out, "Found Pokemon:")?;
        for encounter in &details.pokemon_encounters {
            writeln!(out, " - {}", encounter.pokemon.name)?;
        }
        Ok(())
    }

    async fn catch<W: Write>(&mut self, name: Option<&str>, out: &mut W) -> Result<()> {
        let name = name.ok_or(CommandError::MissingArgument("No Pokemon provided"))?;
        writeln!(out, "Throwing a Pokeball at {}...", name)?;

        // Always fresh from the network
        let body = self.client.fetch(&self.endpoints.pokemon(name)).await?;
        let pokemon: Pokemon = serde_json::from_slice(&body)?;

        let chance = pokemon.catch_chance();
        let roll = (self.roll)();
        debug!(pokemon = name, chance, roll, "Catch attempt");

        if roll <= chance {
            writeln!(out, "{} was caught!", name)?;
            self.pokedex.insert(name.to_string(), pokemon);
        } else {
            writeln!(out, "{} escaped!", name)?;
        }
        Ok(())
    }

    fn inspect<W: Write>(&self, name: Option<&str>, out: &mut W) -> Result<()> {
        let name = name.ok_or(CommandError::MissingArgument("No Pokemon provided"))?;
        let pokemon = self.pokedex.get(name).ok_or(CommandError::NotCaught)?;

        writeln!(out, "Name: {}", pokemon.name)?;
        writeln!(out, "Height: {}", pokemon.height)?;
        writeln!(out, "Weight: {}", pokemon.weight)?;
        writeln!(out, "Stats:")?;
        for stat in &pokemon.stats {
            writeln!(out, " - {}: {}", stat.stat.name, stat.base_stat)?;
        }
        writeln!(out, "Types:")?;
        for kind in &pokemon.types {
            writeln!(out, " - {}", kind.kind.name)?;
        }
        Ok(())
    }

    fn list_pokedex<W: Write>(&self, out: &mut W) -> Result<()> {
        if self.pokedex.is_empty() {
            writeln!(out, "No pokemon caught")?;
            return Ok(());
        }

        writeln!(out, "Your Pokedex:")?;
        for name in self.caught() {
            writeln!(out, " - {}", name)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    use async_trait::async_trait;

    use crate::cache::TimedCache;
    use crate::client::{RawResponse, Transport};
    use crate::error::{FetchError, FetchResult};

    const BASE: &str = "http://stub/api/v2";

    /// Serves fixed bodies by URL; anything else is a 404.
    #[derive(Default)]
    struct RoutedTransport {
        routes: HashMap<String, String>,
        calls: AtomicUsize,
    }

    impl RoutedTransport {
        fn route(mut self, url: impl Into<String>, body: impl Into<String>) -> Self {
            self.routes.insert(url.into(), body.into());
            self
        }
    }

    #[async_trait]
    impl Transport for RoutedTransport {
        async fn get(&self, url: &str) -> FetchResult<RawResponse> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(match self.routes.get(url) {
                Some(body) => RawResponse::new(200, body.clone()),
                None => RawResponse::new(404, "Not Found"),
            })
        }
    }

    fn page(next: Option<&str>, previous: Option<&str>, names: &[&str]) -> String {
        let results: Vec<_> = names
            .iter()
            .map(|name| serde_json::json!({ "name": name, "url": "" }))
            .collect();
        serde_json::json!({
            "count": 40,
            "next": next,
            "previous": previous,
            "results": results,
        })
        .to_string()
    }

    fn pokemon_body(name: &str, base_experience: u32) -> String {
        serde_json::json!({
            "name": name,
            "base_experience": base_experience,
            "height": 4,
            "weight": 60,
            "stats": [{ "base_stat": 35, "stat": { "name": "hp", "url": "" } }],
            "types": [{ "slot": 1, "type": { "name": "electric", "url": "" } }],
        })
        .to_string()
    }

    fn stub_transport() -> Arc<RoutedTransport> {
        let endpoints = Endpoints::new(BASE);
        let second = format!("{BASE}/location-area?offset=20&limit=20");
        Arc::new(
            RoutedTransport::default()
                .route(
                    endpoints.first_location_page(),
                    page(Some(second.as_str()), None, &["canalave-city-area", "eterna-city-area"]),
                )
                .route(
                    second,
                    page(None, Some(endpoints.first_location_page().as_str()), &["pastoria-city-area"]),
                )
                .route(
                    endpoints.location_area("canalave-city-area"),
                    serde_json::json!({
                        "id": 1,
                        "name": "canalave-city-area",
                        "location": { "name": "canalave-city", "url": "" },
                        "pokemon_encounters": [
                            { "pokemon": { "name": "tentacool", "url": "" } },
                            { "pokemon": { "name": "staryu", "url": "" } }
                        ]
                    })
                    .to_string(),
                )
                .route(endpoints.pokemon("pikachu"), pokemon_body("pikachu", 112)),
        )
    }

    fn session(transport: Arc<RoutedTransport>) -> Session {
        let cache = Arc::new(TimedCache::new(Duration::from_secs(5)));
        let client = FetchClient::with_transport(transport, Some(cache));
        Session::new(client, Endpoints::new(BASE))
    }

    async fn run(session: &mut Session, line: &str) -> (Result<Flow>, String) {
        let mut out = Vec::new();
        let result = session.execute(line, &mut out).await;
        (result, String::from_utf8(out).unwrap())
    }

    #[tokio::test]
    async fn test_blank_line_is_noop() {
        let transport = stub_transport();
        let mut session = session(transport.clone());

        let (result, output) = run(&mut session, "   ").await;
        assert_eq!(result.unwrap(), Flow::Continue);
        assert!(output.is_empty());
        assert_eq!(transport.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_unknown_command() {
        let mut session = session(stub_transport());

        let (result, _) = run(&mut session, "fly").await;
        assert!(matches!(result, Err(CommandError::UnknownCommand)));
    }

    #[tokio::test]
    async fn test_help_lists_every_command() {
        let mut session = session(stub_transport());

        let (result, output) = run(&mut session, "HELP").await;
        assert_eq!(result.unwrap(), Flow::Continue);
        assert!(output.starts_with("Welcome to the Pokedex!\nUsage:\n\n"));
        for command in Command::ALL {
            assert!(output.contains(&format!("{}: ", command.name())));
        }
    }

    #[tokio::test]
    async fn test_map_pages_forward_and_back() {
        let transport = stub_transport();
        let mut session = session(transport.clone());

        let (_, output) = run(&mut session, "map").await;
        assert_eq!(output, "canalave-city-area\neterna-city-area\n");

        let (_, output) = run(&mut session, "map").await;
        assert_eq!(output, "pastoria-city-area\n");

        let (_, output) = run(&mut session, "map").await;
        assert_eq!(output, "No next page\n");

        let (_, output) = run(&mut session, "mapb").await;
        assert_eq!(output, "canalave-city-area\neterna-city-area\n");

        // The revisited first page came from the cache
        assert_eq!(transport.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_mapb_on_first_page() {
        let transport = stub_transport();
        let mut session = session(transport.clone());

        let (result, output) = run(&mut session, "mapb").await;
        assert!(result.is_ok());
        assert_eq!(output, "No previous page\n");
        assert_eq!(transport.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_explore_lists_encounters() {
        let mut session = session(stub_transport());

        let (result, output) = run(&mut session, "explore canalave-city-area").await;
        assert!(result.is_ok());
        assert_eq!(
            output,
            "Exploring canalave-city-area...\nFound Pokemon:\n - tentacool\n - staryu\n"
        );
    }

    #[tokio::test]
    async fn test_explore_requires_area() {
        let mut session = session(stub_transport());

        let (result, _) = run(&mut session, "explore").await;
        assert!(matches!(
            result,
            Err(CommandError::MissingArgument("No location area provided"))
        ));
    }

    #[tokio::test]
    async fn test_explore_unknown_area_reports_status() {
        let mut session = session(stub_transport());

        let (result, _) = run(&mut session, "explore nowhere").await;
        assert!(matches!(
            result,
            Err(CommandError::Fetch(FetchError::RemoteStatus { status: 404, .. }))
        ));
    }

    #[tokio::test]
    async fn test_catch_then_inspect() {
        let mut session = session(stub_transport()).with_roll(|| 0.0);

        let (_, output) = run(&mut session, "catch pikachu").await;
        assert_eq!(output, "Throwing a Pokeball at pikachu...\npikachu was caught!\n");
        assert_eq!(session.caught().collect::<Vec<_>>(), vec!["pikachu"]);

        let (_, output) = run(&mut session, "inspect pikachu").await;
        assert_eq!(
            output,
            "Name: pikachu\nHeight: 4\nWeight: 60\nStats:\n - hp: 35\nTypes:\n - electric\n"
        );

        let (_, output) = run(&mut session, "pokedex").await;
        assert_eq!(output, "Your Pokedex:\n - pikachu\n");
    }

    #[tokio::test]
    async fn test_catch_escape() {
        let mut session = session(stub_transport()).with_roll(|| 0.99);

        let (_, output) = run(&mut session, "catch pikachu").await;
        assert!(output.ends_with("pikachu escaped!\n"));
        assert_eq!(session.caught().count(), 0);
    }

    #[tokio::test]
    async fn test_catch_bypasses_cache() {
        let transport = stub_transport();
        let mut session = session(transport.clone()).with_roll(|| 0.99);

        let _ = run(&mut session, "catch pikachu").await;
        let _ = run(&mut session, "catch pikachu").await;

        assert_eq!(transport.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_inspect_uncaught() {
        let mut session = session(stub_transport());

        let (result, _) = run(&mut session, "inspect pikachu").await;
        assert!(matches!(result, Err(CommandError::NotCaught)));
    }

    #[tokio::test]
    async fn test_empty_pokedex() {
        let mut session = session(stub_transport());

        let (_, output) = run(&mut session, "pokedex").await;
        assert_eq!(output, "No pokemon caught\n");
    }

    #[tokio::test]
    async fn test_exit() {
        let mut session = session(stub_transport());

        let (result, output) = run(&mut session, "exit").await;
        assert_eq!(result.unwrap(), Flow::Exit);
        assert_eq!(output, "Closing the Pokedex... Goodbye!\n");
    }
}
