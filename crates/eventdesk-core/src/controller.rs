// ── View controller ──
//
// Owns the session state and mediates between user commands, the gateway
// and the render layer. Every operation takes `&mut self`, so a session
// can only have one operation in flight at a time.

use std::sync::Arc;

use chrono::{Local, NaiveDateTime};
use tracing::{debug, info};

use eventdesk_api::EventsClient;

use crate::command::{Command, Outcome, PageDirection};
use crate::config::ClientConfig;
use crate::convert;
use crate::error::CoreError;
use crate::feedback::{Confirm, Feedback};
use crate::gateway::Gateway;
use crate::messages;
use crate::model::{Event, EventId, EventStatus, Participant, ParticipationId, Statistics};
use crate::render;
use crate::search::SearchFilter;
use crate::state::{AppState, DetailPanel, EventForm, PageInfo, ParticipantForm};
use crate::view::View;

pub struct ViewController {
    gateway: Gateway,
    confirm: Arc<dyn Confirm>,
    state: AppState,
}

impl ViewController {
    /// Build a controller for one session. Does not touch the network.
    pub fn new(
        config: &ClientConfig,
        feedback: Arc<dyn Feedback>,
        confirm: Arc<dyn Confirm>,
    ) -> Result<Self, CoreError> {
        let client = EventsClient::new(config.server.as_str(), &config.transport())?;
        Ok(Self::with_client(client, config.page_size, feedback, confirm))
    }

    /// Build around an existing API client.
    pub fn with_client(
        client: EventsClient,
        page_size: u32,
        feedback: Arc<dyn Feedback>,
        confirm: Arc<dyn Confirm>,
    ) -> Self {
        Self {
            gateway: Gateway::new(client, feedback),
            confirm,
            state: AppState::new(page_size),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    // ── Rendering ────────────────────────────────────────────────────

    /// Render the current view inside the page shell.
    pub fn render(&self) -> Result<String, CoreError> {
        self.render_at(Local::now().naive_local())
    }

    /// Render with an explicit "now" for the upcoming-event count.
    pub fn render_at(&self, now: NaiveDateTime) -> Result<String, CoreError> {
        render::page(&self.state, now)
    }

    // ── Dispatch ─────────────────────────────────────────────────────

    pub async fn dispatch(&mut self, command: Command) -> Result<Outcome, CoreError> {
        debug!(?command, "dispatch");
        match command {
            Command::SwitchView(view) => self.switch_view(view).await?,
            Command::ShowCreateForm => self.show_create_form(),
            Command::CancelForm => self.cancel_form().await?,
            Command::SetFilter(filter) => self.set_filter(filter),
            Command::Search => self.search_events().await?,
            Command::ClearFilters => self.clear_filters().await?,
            Command::ChangePage(direction) => self.change_page(direction).await?,
            Command::ShowEventDetails(id) => self.show_event_details(id).await?,
            Command::CloseDetails => self.close_details(),
            Command::EditEvent(id) => self.edit_event(id).await?,
            Command::SaveEvent(form) => self.save_event(form).await?,
            Command::DeleteEvent(id) => return self.delete_event(id).await,
            Command::RegisterParticipant(form) => self.register_participant(form).await?,
            Command::RemoveParticipant(id) => return self.remove_participant(id).await,
            Command::LoadStatistics => self.load_statistics().await?,
        }
        Ok(Outcome::Done)
    }

    // ── Navigation ───────────────────────────────────────────────────

    /// Enter `view` and run its load routine.
    pub async fn switch_view(&mut self, view: View) -> Result<(), CoreError> {
        info!(%view, "switching view");
        self.state.view = view;
        match view {
            View::Dashboard => self.load_dashboard().await,
            View::Events => self.load_events().await,
            View::CreateEvent => {
                self.show_create_form();
                Ok(())
            }
            View::Statistics => self.load_statistics().await,
        }
    }

    /// Fetch events and statistics together.
    pub async fn load_dashboard(&mut self) -> Result<(), CoreError> {
        let client = self.gateway.client();
        let (events, stats) = tokio::join!(
            self.gateway.call("list events", client.list_events()),
            self.gateway.call("load statistics", client.statistics()),
        );
        let (events, stats) = (events?, stats?);

        self.state.events = convert::collect(events);
        self.state.statistics = Statistics::from(stats);
        self.state.last_page = None;
        Ok(())
    }

    // ── Event list ───────────────────────────────────────────────────

    pub async fn load_events(&mut self) -> Result<(), CoreError> {
        let events = self
            .gateway
            .call("list events", self.gateway.client().list_events())
            .await?;
        self.state.events = convert::collect(events);
        self.state.last_page = None;
        Ok(())
    }

    /// Replace the filter fields. No request is made.
    pub fn set_filter(&mut self, filter: SearchFilter) {
        self.state.filter = filter;
    }

    /// Jump to a zero-based page. No request is made.
    pub fn set_page(&mut self, page: u32) {
        self.state.page = page;
    }

    /// Search with the current filter and page.
    pub async fn search_events(&mut self) -> Result<(), CoreError> {
        let request = self
            .state
            .filter
            .to_request(self.state.page, self.state.page_size);
        let page = self
            .gateway
            .call("search events", self.gateway.client().search_events(&request))
            .await?;

        self.state.last_page = Some(PageInfo::from(&page));
        self.state.events = convert::collect(page.events);
        Ok(())
    }

    /// Reset every filter field and the page, then plain load.
    pub async fn clear_filters(&mut self) -> Result<(), CoreError> {
        self.state.filter = SearchFilter::default();
        self.state.page = 0;
        self.load_events().await
    }

    /// Move one page and reload. The page never goes below 0.
    pub async fn change_page(&mut self, direction: PageDirection) -> Result<(), CoreError> {
        self.state.page = match direction {
            PageDirection::Next => self.state.page.saturating_add(1),
            PageDirection::Previous => self.state.page.saturating_sub(1),
        };
        if self.state.filter.is_active() {
            self.search_events().await
        } else {
            self.load_events().await
        }
    }

    pub async fn events_by_status(&mut self, status: &EventStatus) -> Result<(), CoreError> {
        let events = self
            .gateway
            .call(
                "events by status",
                self.gateway.client().events_by_status(status.code()),
            )
            .await?;
        self.state.events = convert::collect(events);
        self.state.last_page = None;
        Ok(())
    }

    pub async fn events_by_organizer(&mut self, organizer: &str) -> Result<(), CoreError> {
        let events = self
            .gateway
            .call(
                "events by organizer",
                self.gateway.client().events_by_organizer(organizer),
            )
            .await?;
        self.state.events = convert::collect(events);
        self.state.last_page = None;
        Ok(())
    }

    // ── Event details ────────────────────────────────────────────────

    /// Fetch the event and its roster, then open the detail panel.
    pub async fn show_event_details(&mut self, id: EventId) -> Result<(), CoreError> {
        let client = self.gateway.client();
        let event = self
            .gateway
            .call("load event", client.get_event(id.0))
            .await?;
        let participants = self
            .gateway
            .call("load participants", client.list_participants(id.0))
            .await?;

        self.state.selected_event = Some(id);
        self.state.details = Some(DetailPanel {
            event: Event::from(event),
            participants: convert::collect(participants),
        });
        Ok(())
    }

    pub fn close_details(&mut self) {
        self.state.details = None;
        self.state.participant_form = ParticipantForm::default();
    }

    // ── Event form ───────────────────────────────────────────────────

    /// Blank form in create mode.
    pub fn show_create_form(&mut self) {
        self.state.selected_event = None;
        self.state.form = EventForm::default();
        self.state.view = View::CreateEvent;
    }

    /// Leave the form for the event list.
    pub async fn cancel_form(&mut self) -> Result<(), CoreError> {
        self.switch_view(View::Events).await
    }

    /// Load `id` into the form in edit mode.
    pub async fn edit_event(&mut self, id: EventId) -> Result<(), CoreError> {
        let event = self
            .gateway
            .call("load event", self.gateway.client().get_event(id.0))
            .await?;

        self.state.form = EventForm::from_event(&Event::from(event));
        self.state.selected_event = Some(id);
        self.state.view = View::CreateEvent;
        Ok(())
    }

    /// Create when no event is selected, update the selected one otherwise.
    /// Ends in the event list.
    pub async fn save_event(&mut self, form: EventForm) -> Result<(), CoreError> {
        self.state.form = form;
        let request = self
            .state
            .form
            .to_request()
            .map_err(|e| self.gateway.reject("save event", e))?;

        let client = self.gateway.client();
        match self.state.selected_event {
            None => {
                let created = self
                    .gateway
                    .call("create event", client.create_event(&request))
                    .await?;
                debug!(id = created.event_id, "event created");
                self.gateway.notify(messages::EVENT_CREATED);
            }
            Some(id) => {
                self.gateway
                    .call("update event", client.update_event(id.0, &request))
                    .await?;
                debug!(%id, "event updated");
                self.gateway.notify(messages::EVENT_UPDATED);
            }
        }

        self.state.form = EventForm::default();
        self.switch_view(View::Events).await
    }

    /// Delete after confirmation, then reload the list.
    pub async fn delete_event(&mut self, id: EventId) -> Result<Outcome, CoreError> {
        if !self.confirm.confirm(messages::CONFIRM_DELETE_EVENT) {
            debug!(%id, "delete declined");
            return Ok(Outcome::Declined);
        }

        self.gateway
            .call("delete event", self.gateway.client().delete_event(id.0))
            .await?;
        self.gateway.notify(messages::EVENT_DELETED);

        if self.state.selected_event == Some(id) {
            self.state.selected_event = None;
            self.state.details = None;
        }
        self.load_events().await?;
        Ok(Outcome::Done)
    }

    // ── Participants ─────────────────────────────────────────────────

    /// Register against the selected event and refresh its details.
    pub async fn register_participant(&mut self, form: ParticipantForm) -> Result<(), CoreError> {
        let id = self.selection("register participant")?;
        self.state.participant_form = form;
        let request = self
            .state
            .participant_form
            .to_request(id)
            .map_err(|e| self.gateway.reject("register participant", e))?;

        self.gateway
            .call(
                "register participant",
                self.gateway.client().register_participant(&request),
            )
            .await?;
        self.gateway.notify(messages::PARTICIPANT_REGISTERED);

        self.state.participant_form = ParticipantForm::default();
        self.show_event_details(id).await
    }

    /// Cancel one registration after confirmation.
    pub async fn remove_participant(
        &mut self,
        participation: ParticipationId,
    ) -> Result<Outcome, CoreError> {
        if !self.confirm.confirm(messages::CONFIRM_REMOVE_PARTICIPANT) {
            return Ok(Outcome::Declined);
        }

        self.gateway
            .call(
                "remove participant",
                self.gateway.client().cancel_participation(participation.0),
            )
            .await?;
        self.gateway.notify(messages::PARTICIPANT_REMOVED);

        self.refresh_details().await?;
        Ok(Outcome::Done)
    }

    /// Cancel `email`'s registration for `event` after confirmation.
    pub async fn cancel_by_email(
        &mut self,
        event: EventId,
        email: &str,
    ) -> Result<Outcome, CoreError> {
        if !self.confirm.confirm(messages::CONFIRM_REMOVE_PARTICIPANT) {
            return Ok(Outcome::Declined);
        }

        self.gateway
            .call(
                "cancel participation",
                self.gateway
                    .client()
                    .cancel_participation_by_email(event.0, email),
            )
            .await?;
        self.gateway.notify(messages::PARTICIPANT_REMOVED);

        if self.state.selected_event == Some(event) {
            self.refresh_details().await?;
        }
        Ok(Outcome::Done)
    }

    /// Every registration made with `email`.
    pub async fn participations_by_email(
        &mut self,
        email: &str,
    ) -> Result<Vec<Participant>, CoreError> {
        let participants = self
            .gateway
            .call(
                "participations by email",
                self.gateway.client().participations_by_email(email),
            )
            .await?;
        Ok(convert::collect(participants))
    }

    // ── Statistics ───────────────────────────────────────────────────

    pub async fn load_statistics(&mut self) -> Result<(), CoreError> {
        let stats = self
            .gateway
            .call("load statistics", self.gateway.client().statistics())
            .await?;
        self.state.statistics = Statistics::from(stats);
        Ok(())
    }

    // ── Helpers ──────────────────────────────────────────────────────

    fn selection(&self, operation: &str) -> Result<EventId, CoreError> {
        self.state.selected_event.ok_or_else(|| {
            self.gateway.reject(
                operation,
                CoreError::NoSelection {
                    operation: operation.into(),
                },
            )
        })
    }

    async fn refresh_details(&mut self) -> Result<(), CoreError> {
        match self.state.selected_event {
            Some(id) => self.show_event_details(id).await,
            None => Ok(()),
        }
    }
}
