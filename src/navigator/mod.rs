mod action;
mod selection;

pub use action::{Action, Event};
pub use selection::{Selection, MISSING_ENDPOINTS};

use async_channel::Receiver;

use crate::{
    api::RouteService,
    config::Config,
    entities::{RouteRequest, RouteResponse},
    error::{decode_error, routing_error, Error, ErrorKind},
    map::{LayerId, MapSurface, TileLayer},
    render::{GraphRenderer, MarkerTable, RouteDisplay},
    ui::{Indicator, Input, Ui},
};

pub const INITIALIZATION_FAILED: &str = "Failed to load map data";
pub const ROUTE_FAILED: &str = "Failed to calculate route";

/// Ties the route server, the map and the page together and handles every
/// user action. Actions are handled one at a time; a route request started
/// while another is pending waits for it, so replies are never applied out
/// of order.
pub struct Navigator<S, M, U> {
    config: Config,
    service: S,
    map: M,
    ui: U,
    tiles: Option<LayerId>,
    graph: GraphRenderer,
    route: RouteDisplay,
}

impl<S, M, U> Navigator<S, M, U>
where
    S: RouteService,
    M: MapSurface,
    U: Ui,
{
    pub fn new(config: Config, service: S, map: M, ui: U) -> Self {
        let route = RouteDisplay::new(config.fit_padding);

        Self {
            config,
            service,
            map,
            ui,
            tiles: None,
            graph: GraphRenderer::new(),
            route,
        }
    }

    pub fn map(&self) -> &M {
        &self.map
    }

    pub fn ui(&self) -> &U {
        &self.ui
    }

    pub fn markers(&self) -> Option<&MarkerTable> {
        self.graph.markers()
    }

    pub fn route(&self) -> &RouteDisplay {
        &self.route
    }

    /// Looks up and runs the handler for a named action.
    #[tracing::instrument(skip(self))]
    pub async fn dispatch(&mut self, action: Action) -> Result<(), Error> {
        match action {
            Action::Initialize => self.initialize().await,
            Action::FindRoute => self.submit_route_request().await,
            Action::Reset => {
                self.reset();
                Ok(())
            }
        }
    }

    pub async fn handle(&mut self, event: Event) -> Result<(), Error> {
        match event {
            Event::Edit { input, value } => {
                self.ui.set_value(input, &value);
                Ok(())
            }
            Event::Check { toggle, checked } => {
                self.ui.set_checked(toggle, checked);
                Ok(())
            }
            Event::Trigger(action) => self.dispatch(action).await,
        }
    }

    /// Handles events until every sender is dropped.
    pub async fn run(&mut self, events: Receiver<Event>) {
        self.run_with(events, |_, _, _| {}).await
    }

    /// Like [`Navigator::run`], calling `after` once each triggered action
    /// has been handled.
    pub async fn run_with<F>(&mut self, events: Receiver<Event>, mut after: F)
    where
        F: FnMut(&Self, Action, &Result<(), Error>),
    {
        while let Ok(event) = events.recv().await {
            let action = match &event {
                Event::Trigger(action) => Some(*action),
                _ => None,
            };

            let result = self.handle(event).await;
            if let Err(err) = &result {
                tracing::warn!(kind = ?err.kind(), "event failed: {}", err);
            }

            if let Some(action) = action {
                after(self, action, &result);
            }
        }

        tracing::info!("event channel closed");
    }

    #[tracing::instrument(skip(self))]
    pub async fn initialize(&mut self) -> Result<(), Error> {
        self.map.set_view(self.config.center, self.config.zoom);

        if self.tiles.is_none() {
            self.tiles = Some(self.map.add_tile_layer(TileLayer {
                url: self.config.tile_url.clone(),
                attribution: self.config.attribution.clone(),
            }));
        }

        let result = match self.service.fetch_dataset().await {
            Ok(dataset) => self
                .graph
                .render(&mut self.map, &mut self.ui, &dataset)
                .map(|markers| markers.len()),
            Err(err) => Err(err),
        };

        match result {
            Ok(markers) => {
                tracing::info!(markers, "map initialized");
                Ok(())
            }
            Err(err) => {
                tracing::error!("error initializing map: {}", err);
                self.ui.notify(INITIALIZATION_FAILED);
                Err(err)
            }
        }
    }

    #[tracing::instrument(skip(self))]
    pub async fn submit_route_request(&mut self) -> Result<(), Error> {
        let request = match Selection::read(&self.ui).into_request() {
            Ok(request) => request,
            Err(err) => {
                self.ui.notify(&err.message);
                return Err(err);
            }
        };

        self.ui.set_visible(Indicator::Loading, true);
        let result = self.resolve_route(&request).await;

        if let Err(err) = &result {
            match err.kind() {
                ErrorKind::Routing => self.ui.notify(&err.message),
                _ => {
                    tracing::error!("error finding route: {}", err);
                    self.ui.notify(ROUTE_FAILED);
                }
            }
        }

        self.ui.set_visible(Indicator::Loading, false);

        result
    }

    pub fn reset(&mut self) {
        self.route.clear(&mut self.map, &mut self.ui);
        self.ui.set_value(Input::Start, "");
        self.ui.set_value(Input::End, "");

        tracing::info!("route reset");
    }

    async fn resolve_route(&mut self, request: &RouteRequest) -> Result<(), Error> {
        match self.service.request_route(request).await? {
            RouteResponse::Found(route) => self.route.show(&mut self.map, &mut self.ui, &route),
            RouteResponse::Rejected { error } if error.trim().is_empty() => {
                Err(decode_error("route rejected without a message"))
            }
            RouteResponse::Rejected { error } => Err(routing_error(error)),
        }
    }
}
