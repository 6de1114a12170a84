use fallacy_core::{CopyOutcome, Notice, NoticeBoard, Tone};
use std::rc::Rc;
use yew::prelude::*;

pub enum NoticeAction {
    Show { message: String, tone: Tone },
    Fade(u32),
    Dismiss(u32),
}

impl NoticeAction {
    #[must_use]
    pub fn copy_result(outcome: CopyOutcome) -> Self {
        Self::Show {
            message: outcome.message().to_string(),
            tone: outcome.tone(),
        }
    }
}

#[derive(Clone, Default, PartialEq)]
pub struct NoticeState(pub NoticeBoard);

impl Reducible for NoticeState {
    type Action = NoticeAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut board = self.0.clone();
        let changed = match action {
            NoticeAction::Show { message, tone } => {
                board.show(message, tone);
                true
            }
            NoticeAction::Fade(id) => board.fade(id),
            NoticeAction::Dismiss(id) => board.dismiss(id),
        };
        if changed { Rc::new(Self(board)) } else { self }
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct Props {
    pub notices: Vec<Notice>,
    pub on_fade: Callback<u32>,
    pub on_dismiss: Callback<u32>,
}

/// Transient notices; none of them takes focus or blocks input.
#[function_component(NoticeStack)]
pub fn notice_stack(p: &Props) -> Html {
    html! {
        <div class="notice-stack" role="status" aria-live="polite">
            { for p.notices.iter().map(|notice| html! {
                <NoticeToast
                    key={notice.id}
                    notice={notice.clone()}
                    on_fade={p.on_fade.clone()}
                    on_dismiss={p.on_dismiss.clone()}
                />
            }) }
        </div>
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct ToastProps {
    pub notice: Notice,
    pub on_fade: Callback<u32>,
    pub on_dismiss: Callback<u32>,
}

#[function_component(NoticeToast)]
pub fn notice_toast(p: &ToastProps) -> Html {
    {
        let on_fade = p.on_fade.clone();
        let on_dismiss = p.on_dismiss.clone();
        use_effect_with(p.notice.id, move |id| {
            schedule_dismissal(*id, on_fade, on_dismiss);
            || {}
        });
    }

    let class = classes!(
        "notice",
        matches!(p.notice.tone, Tone::Error).then_some("notice--error"),
        p.notice.fading.then_some("notice--fading"),
    );
    html! {
        <div {class}>{ p.notice.message.clone() }</div>
    }
}

#[cfg(target_arch = "wasm32")]
fn schedule_dismissal(id: u32, on_fade: Callback<u32>, on_dismiss: Callback<u32>) {
    use fallacy_core::constants::{NOTICE_FADE_MS, NOTICE_VISIBLE_MS};

    let visible = i32::try_from(NOTICE_VISIBLE_MS).unwrap_or(i32::MAX);
    let fade = i32::try_from(NOTICE_FADE_MS).unwrap_or(i32::MAX);
    wasm_bindgen_futures::spawn_local(async move {
        let _ = crate::dom::sleep_ms(visible).await;
        on_fade.emit(id);
        let _ = crate::dom::sleep_ms(fade).await;
        on_dismiss.emit(id);
    });
}

#[cfg(not(target_arch = "wasm32"))]
fn schedule_dismissal(id: u32, on_fade: Callback<u32>, on_dismiss: Callback<u32>) {
    let _ = (id, on_fade, on_dismiss);
}
