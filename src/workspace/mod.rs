use crate::chat::ChatResponder;
use crate::config::AppConfig;
use crate::conversation::ConversationManager;
use crate::routes::Route;
use crate::storage::SessionStore;
use crate::view::{AnimationHandle, ParallaxAnimator, ViewState};
use std::sync::Arc;

pub enum PageLoad {
    Ready(ProjectWorkspace),
    Redirect(Route),
}

/// Everything the per-project page owns while it is mounted.
pub struct ProjectWorkspace {
    conversation: Arc<ConversationManager>,
    view: ViewState,
    animator: ParallaxAnimator,
    animation: Option<AnimationHandle>,
}

impl ProjectWorkspace {
    /// Loads the project and starts the page. A missing or unreadable record
    /// sends the user back to the project list.
    pub async fn mount(
        project_id: &str,
        store: SessionStore,
        responder: Arc<dyn ChatResponder>,
        config: &AppConfig,
    ) -> PageLoad {
        let conversation =
            ConversationManager::new(project_id, store, responder, config.greeting_delay());

        match conversation.load().await {
            Ok(true) => {}
            Ok(false) => return PageLoad::Redirect(Route::Projects),
            Err(e) => {
                log::error!("Failed to load project {}: {}", project_id, e);
                return PageLoad::Redirect(Route::Projects);
            }
        }

        let animator = ParallaxAnimator::new(config.smoothing_factor);
        let animation = animator.start(config.frame_interval());
        log::info!("Mounted workspace for project {}", project_id);

        PageLoad::Ready(Self {
            conversation: Arc::new(conversation),
            view: ViewState::default(),
            animator,
            animation: Some(animation),
        })
    }

    /// Shared so that in-flight submissions can outlive the page.
    pub fn conversation(&self) -> &Arc<ConversationManager> {
        &self.conversation
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut ViewState {
        &mut self.view
    }

    pub fn animator(&self) -> &ParallaxAnimator {
        &self.animator
    }

    pub fn is_animating(&self) -> bool {
        self.animation.as_ref().is_some_and(AnimationHandle::is_running)
    }

    pub async fn title(&self) -> String {
        self.conversation
            .record()
            .await
            .map(|record| record.short_title())
            .unwrap_or_default()
    }

    pub async fn unmount(mut self) {
        self.conversation.dispose();
        if let Some(animation) = self.animation.take() {
            animation.stop().await;
        }
        log::info!("Unmounted workspace for project {}", self.conversation.project_id());
    }
}
