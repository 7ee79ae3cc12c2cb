use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
}

/// Inline error text. The fetch is once-per-mount by contract, so there is
/// no retry affordance here.
#[function_component(ErrorDisplay)]
pub fn error_display(props: &ErrorDisplayProps) -> Html {
    log::warn!("Displaying error to user: {}", props.message);

    html! {
        <div class="alert alert-error max-w-lg">
            <i class="fas fa-exclamation-circle text-2xl"></i>
            <span class="text-red-500">{&props.message}</span>
        </div>
    }
}
