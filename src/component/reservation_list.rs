use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};
use crate::component::renderer::{self, RenderedList};
use crate::component::view_state::ViewState;
use crate::errors::FetchError;
use crate::helpers::notifier::{Notifier, SOMETHING_WENT_WRONG};
use crate::helpers::surface::Surface;
use crate::models::reservation::Reservation;
use crate::repositories::reservation_api::ReservationApiRepo;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lifecycle {
    Created,
    Mounted,
    Unmounted,
}

#[derive(Debug)]
pub enum Message {
    ReservationsFetched(Result<Vec<Reservation>, FetchError>),
}

pub struct ReservationList<S: Surface, N: Notifier> {
    repo: Arc<ReservationApiRepo>,
    state: ViewState,
    surface: S,
    notifier: N,
    lifecycle: Lifecycle,
    dirty: bool,
    inbox: Option<UnboundedReceiver<Message>>,
    loader: Option<JoinHandle<()>>,
}

impl<S: Surface, N: Notifier> ReservationList<S, N> {
    pub fn new(
        repo: Arc<ReservationApiRepo>,
        surface: S,
        notifier: N,
    ) -> Self {
        Self {
            repo,
            state: ViewState::default(),
            surface,
            notifier,
            lifecycle: Lifecycle::Created,
            dirty: false,
            inbox: None,
            loader: None,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn render(&self) -> RenderedList {
        debug!("Rendering {} reservations", self.state.reservations().len());
        renderer::render(&self.state)
    }

    /// Draws the initial frame, then schedules the one and only load.
    /// Must be called from within a Tokio runtime.
    pub fn mount(&mut self) -> anyhow::Result<()> {
        if self.lifecycle != Lifecycle::Created {
            warn!("Ignoring mount of a component that is already {:?}", self.lifecycle);
            return Ok(());
        }

        let frame = self.render();
        self.surface.draw(&frame)?;
        self.lifecycle = Lifecycle::Mounted;
        info!("Reservation list mounted");

        self.did_mount();
        Ok(())
    }

    fn did_mount(&mut self) {
        let (sender, inbox) = mpsc::unbounded_channel();
        self.inbox = Some(inbox);
        self.loader = Some(spawn_loader(self.repo.clone(), sender));
    }

    pub async fn update(&mut self, message: Message) {
        if self.lifecycle != Lifecycle::Mounted {
            debug!("Discarding message for a component that is {:?}", self.lifecycle);
            return;
        }

        match message {
            Message::ReservationsFetched(Ok(reservations)) => {
                debug!("Loaded reservations: {:?}", reservations);
                let previous = self.state.clone();
                self.state.replace_reservations(reservations);
                if !self.state.same_reservations(&previous) {
                    self.request_redraw();
                }
            }
            Message::ReservationsFetched(Err(e)) if e.is_rejection() => {
                warn!("Reservation endpoint {} rejected the request due to: {}", self.repo.endpoint(), e);
                self.notifier.alert(SOMETHING_WENT_WRONG).await;
            }
            Message::ReservationsFetched(Err(e)) => {
                error!("Something went wrong loading reservations due to: {}", e);
            }
        }
    }

    pub fn request_redraw(&mut self) {
        self.dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Draws a fresh frame if something changed since the last one.
    pub fn flush(&mut self) -> anyhow::Result<bool> {
        if !self.dirty || self.lifecycle != Lifecycle::Mounted {
            return Ok(false);
        }

        let frame = self.render();
        self.surface.draw(&frame)?;
        self.dirty = false;
        Ok(true)
    }

    /// Next message from the loader, or `None` once the loader is gone.
    pub async fn next_message(&mut self) -> Option<Message> {
        let inbox = self.inbox.as_mut()?;
        let message = inbox.recv().await;
        if message.is_none() {
            self.inbox = None;
            self.loader = None;
        }
        message
    }

    /// Mounts and then handles loader messages until the load settles.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        self.mount()?;
        while let Some(message) = self.next_message().await {
            self.update(message).await;
            self.flush()?;
        }
        Ok(())
    }

    /// Tears the view down. A load still in flight is aborted and its result never applied.
    pub fn unmount(&mut self) {
        if self.lifecycle == Lifecycle::Unmounted {
            return;
        }

        if let Some(loader) = self.loader.take() {
            if !loader.is_finished() {
                info!("Cancelling pending reservation load");
            }
            loader.abort();
        }
        self.inbox = None;
        self.state = ViewState::default();
        self.dirty = false;
        self.lifecycle = Lifecycle::Unmounted;
        info!("Reservation list unmounted");
    }
}

impl<S: Surface, N: Notifier> Drop for ReservationList<S, N> {
    fn drop(&mut self) {
        if let Some(loader) = self.loader.take() {
            loader.abort();
        }
    }
}

fn spawn_loader(
    repo: Arc<ReservationApiRepo>,
    sender: UnboundedSender<Message>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let result = repo.fetch_reservations().await;
        if sender.send(Message::ReservationsFetched(result)).is_err() {
            debug!("Reservation list went away before the load finished");
        }
    })
}
