use yew::prelude::*;

use crate::styles;

// Result line under the wheel
#[derive(Properties, PartialEq)]
pub struct ResultDisplayProps {
    pub text: String,
    pub is_error: bool,
}

#[function_component(ResultDisplay)]
pub fn result_display(props: &ResultDisplayProps) -> Html {
    if props.text.is_empty() {
        return html! {};
    }
    let class = if props.is_error { styles::CARD_ERROR } else { styles::CARD_SUCCESS };
    html! {
        <div id="result" class={classes!("mt-6", "text-center", "font-bold", "text-lg", class)}>
            {&props.text}
        </div>
    }
}

// Spin button component
#[derive(Properties, PartialEq)]
pub struct SpinButtonProps {
    pub is_spinning: bool,
    pub onclick: Callback<MouseEvent>,
}

#[function_component(SpinButton)]
pub fn spin_button(props: &SpinButtonProps) -> Html {
    let button_text = if props.is_spinning { "Đang quay..." } else { "Quay" };

    let button_class = if props.is_spinning {
        "bg-gradient-to-r from-gray-400 to-gray-500 opacity-75 cursor-not-allowed text-white"
    } else {
        "bg-gradient-to-r from-yellow-400 to-orange-500 hover:from-yellow-500 hover:to-orange-600 text-white shadow-lg hover:shadow-xl transform hover:-translate-y-0.5 active:translate-y-0"
    };

    let spin_icon_class = if props.is_spinning {
        "inline-block mr-2 animate-spin"
    } else {
        "hidden"
    };

    html! {
        <div class={classes!("relative", "overflow-hidden", "rounded-full", "w-full", button_class)}>
            <button
                id="spin-btn"
                onclick={props.onclick.clone()}
                disabled={props.is_spinning}
                class="relative w-full px-8 py-4 font-bold text-lg transition-all duration-300 border-2 border-transparent hover:border-white focus:outline-none bg-transparent"
            >
                <div class="flex items-center justify-center relative z-10">
                    <svg class={spin_icon_class} xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                        <circle cx="12" cy="12" r="10" />
                        <path d="M12 6v6l4 2" />
                    </svg>
                    <span>{button_text}</span>
                </div>
            </button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SoundToggleProps {
    pub enabled: bool,
    pub ontoggle: Callback<MouseEvent>,
}

#[function_component(SoundToggle)]
pub fn sound_toggle(props: &SoundToggleProps) -> Html {
    html! {
        <button
            id="sound-toggle"
            class={classes!(styles::BUTTON_ICON, (!props.enabled).then_some("muted"))}
            onclick={props.ontoggle.clone()}
        >
            <span class="sound-icon text-2xl">{ if props.enabled { "🔊" } else { "🔇" } }</span>
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct WinModalProps {
    pub prize: Option<String>,
    pub onclose: Callback<MouseEvent>,
}

#[function_component(WinModal)]
pub fn win_modal(props: &WinModalProps) -> Html {
    let Some(prize) = &props.prize else {
        return html! {};
    };

    html! {
        <div id="win-modal" class={classes!(styles::MODAL_BACKDROP, "flex")}>
            <div class={classes!(styles::CARD, "max-w-sm", "w-full", "text-center", "space-y-4")}>
                <h2 class={styles::TEXT_H2}>{"🎉 Chúc mừng! 🎉"}</h2>
                <p class={styles::TEXT_BODY}>{"Bạn đã trúng"}</p>
                <p id="prize-name" class={classes!(styles::TEXT_H3, "text-red-600")}>{prize}</p>
                <button class={styles::BUTTON_PRIMARY} onclick={props.onclose.clone()}>
                    {"Đóng"}
                </button>
            </div>
        </div>
    }
}
