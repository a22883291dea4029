use yew::prelude::*;

use crate::state::ViewState;

#[derive(Properties, PartialEq)]
pub struct StatusProps {
    pub state: ViewState,
}

/// Contents of the status area: a loader while a request is pending, the
/// error text after a failure, nothing otherwise.
#[function_component(StatusArea)]
pub fn status_area(props: &StatusProps) -> Html {
    match &props.state {
        ViewState::Loading => html! {
            <div class="loader flex justify-center items-center py-6" aria-hidden="true">
                <span class="loading loading-spinner loading-lg"></span>
            </div>
        },
        ViewState::Failed(message) => {
            log::warn!("Displaying error to user: {}", message);
            html! {
                <div class="error alert alert-error" role="alert">
                    <i class="fas fa-exclamation-circle"></i>
                    <span class="error-message">{message}</span>
                </div>
            }
        }
        ViewState::Idle | ViewState::Loaded(_) => html! {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::ServerRenderer;

    async fn render(state: ViewState) -> String {
        ServerRenderer::<StatusArea>::with_props(move || StatusProps { state })
            .hydratable(false)
            .render()
            .await
    }

    #[tokio::test]
    async fn test_failure_shows_exact_message() {
        let html = render(ViewState::Failed("City not found".to_string())).await;
        assert!(html.contains(r#"<span class="error-message">City not found</span>"#));
    }

    #[tokio::test]
    async fn test_loading_shows_loader() {
        let html = render(ViewState::Loading).await;
        assert!(html.contains("loading-spinner"));
        assert!(!html.contains("error"));
    }

    #[tokio::test]
    async fn test_idle_is_empty() {
        assert_eq!(render(ViewState::Idle).await, "");
    }
}
