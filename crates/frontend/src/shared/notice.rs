use leptos::prelude::*;
use thaw::*;

/// Результат действия, показываемый пользователю
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    Success(String),
    Error(String),
}

#[component]
pub fn NoticeBar(notice: ReadSignal<Option<Notice>>) -> impl IntoView {
    move || {
        notice.get().map(|notice| {
            let (intent, text) = match notice {
                Notice::Success(text) => (MessageBarIntent::Success, text),
                Notice::Error(text) => (MessageBarIntent::Error, text),
            };
            view! {
                <div class="notice">
                    <MessageBar intent=intent>{text}</MessageBar>
                </div>
            }
        })
    }
}
