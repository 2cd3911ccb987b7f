mod confetti_canvas;
mod sound;
mod wheel_canvas;
mod wheel_utils;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wheel_shared::constants::{NO_VALID_SLOT_MESSAGE, RESULT_PREFIX};
use wheel_shared::{Clock, SpinObserver, SpinResult, WheelError, WheelGame};
use yew::prelude::*;

use crate::config::PerformanceClock;
use crate::styles;
use confetti_canvas::ConfettiCanvas;
use sound::SoundBoard;
use wheel_canvas::WheelCanvas;
use wheel_utils::{ResultDisplay, SoundToggle, SpinButton, WinModal};

/// Pushes every frame and the final result of a spin into component state.
struct Presenter {
    angle: UseStateHandle<f64>,
    result_text: UseStateHandle<String>,
    modal_prize: UseStateHandle<Option<String>>,
    confetti_at: UseStateHandle<Option<f64>>,
    sound: Rc<RefCell<SoundBoard>>,
}

impl SpinObserver for Presenter {
    fn on_frame(&mut self, angle: f64, _highlighted: usize) {
        self.angle.set(angle);
    }

    fn on_result(&mut self, result: &SpinResult) -> Result<(), String> {
        let mut sound = self.sound.borrow_mut();
        sound.stop_spin_ticks();

        self.result_text.set(format!("{}{}", RESULT_PREFIX, result.label));
        self.confetti_at.set(Some(PerformanceClock.now_ms()));
        self.modal_prize.set(Some(result.label.clone()));
        sound.play_win()
    }
}

/// Drive `game` with requestAnimationFrame until the spin resolves.
fn animate_spin(
    game: Rc<RefCell<WheelGame>>,
    mut presenter: Presenter,
    is_spinning: UseStateHandle<bool>,
) {
    let f: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();

    *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let frame = game.borrow_mut().tick_clock(&PerformanceClock, &mut presenter);

        match frame {
            Some(frame) if !frame.finished => {
                // Request next frame
                if let Some(window) = web_sys::window() {
                    if let Some(callback) = f.borrow().as_ref() {
                        let _ = window.request_animation_frame(callback.as_ref().unchecked_ref());
                    }
                }
            }
            _ => {
                // Animation complete
                is_spinning.set(game.borrow().is_spinning());
                f.borrow_mut().take();
            }
        }
    }) as Box<dyn FnMut()>));

    // Start the animation
    if let Some(window) = web_sys::window() {
        if let Some(callback) = g.borrow().as_ref() {
            let _ = window.request_animation_frame(callback.as_ref().unchecked_ref());
        }
    }
}

#[function_component(PrizeWheel)]
pub fn prize_wheel() -> Html {
    let game = use_mut_ref(WheelGame::default);
    let sound = use_mut_ref(SoundBoard::restore);
    let slices = use_memo((), {
        let game = game.clone();
        move |_| game.borrow().slices().to_vec()
    });

    let angle = use_state(|| 0.0_f64);
    let is_spinning = use_state(|| false);
    let result_text = use_state(String::new);
    let result_is_error = use_state(|| false);
    let modal_prize = use_state(|| None::<String>);
    let confetti_at = use_state(|| None::<f64>);
    let sound_enabled = use_state(|| sound.borrow().is_enabled());

    let start_spin = {
        let game = game.clone();
        let sound = sound.clone();
        let angle = angle.clone();
        let is_spinning = is_spinning.clone();
        let result_text = result_text.clone();
        let result_is_error = result_is_error.clone();
        let modal_prize = modal_prize.clone();
        let confetti_at = confetti_at.clone();

        Callback::from(move |_: ()| {
            let started = game
                .borrow_mut()
                .spin(&mut rand::thread_rng(), PerformanceClock.now_ms());

            match started {
                Ok(_) => {}
                Err(WheelError::ReentrantSpin) => return,
                Err(WheelError::NoValidSlot) => {
                    result_is_error.set(true);
                    result_text.set(NO_VALID_SLOT_MESSAGE.to_string());
                    return;
                }
                Err(e) => {
                    log::error!("Spin failed: {}", e);
                    return;
                }
            }

            result_is_error.set(false);
            result_text.set(String::new());
            is_spinning.set(true);
            {
                let mut sound = sound.borrow_mut();
                sound.ensure_context();
                sound.start_spin_ticks();
            }

            let presenter = Presenter {
                angle: angle.clone(),
                result_text: result_text.clone(),
                modal_prize: modal_prize.clone(),
                confetti_at: confetti_at.clone(),
                sound: sound.clone(),
            };
            animate_spin(game.clone(), presenter, is_spinning.clone());
        })
    };

    let on_spin_click = {
        let start_spin = start_spin.clone();
        Callback::from(move |_: MouseEvent| start_spin.emit(()))
    };

    let on_sound_toggle = {
        let sound = sound.clone();
        let sound_enabled = sound_enabled.clone();
        Callback::from(move |_: MouseEvent| {
            let enabled = sound.borrow_mut().toggle();
            sound_enabled.set(enabled);
        })
    };

    let on_modal_close = {
        let modal_prize = modal_prize.clone();
        Callback::from(move |_: MouseEvent| modal_prize.set(None))
    };

    html! {
        <div class={classes!(styles::CARD, "w-full", "max-w-xl")}>
            <div class="flex items-center justify-between mb-4">
                <h2 class={styles::TEXT_H2}>{"Vòng quay may mắn"}</h2>
                <SoundToggle enabled={*sound_enabled} ontoggle={on_sound_toggle} />
            </div>
            <div class="flex flex-col items-center space-y-6">
                <WheelCanvas
                    angle={*angle}
                    slices={slices.clone()}
                    is_spinning={*is_spinning}
                    on_center_click={start_spin}
                />
                <div class="w-full max-w-xs">
                    <SpinButton is_spinning={*is_spinning} onclick={on_spin_click} />
                </div>
                <ResultDisplay text={(*result_text).clone()} is_error={*result_is_error} />
            </div>
            <WinModal prize={(*modal_prize).clone()} onclose={on_modal_close} />
            <ConfettiCanvas burst_at={*confetti_at} />
        </div>
    }
}
