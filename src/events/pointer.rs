use super::Listener;
use crate::animate::DomAnimator;
use crate::core::input::PointerState;
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Window-wide mouse and touch tracking feeding the scene pointer.
pub fn wire_pointer(window: &web::Window, pointer: Rc<RefCell<PointerState>>) -> Vec<Listener> {
    let w = window.clone();
    let p = pointer.clone();
    let mouse = Listener::new(window, "mousemove", move |ev: web::MouseEvent| {
        let (vw, vh) = dom::viewport_size(&w);
        p.borrow_mut()
            .set_raw_from_client(ev.client_x() as f32, ev.client_y() as f32, vw, vh);
    });

    let w = window.clone();
    let touch = Listener::new(window, "touchmove", move |ev: web::TouchEvent| {
        if let Some(t) = ev.touches().get(0) {
            let (vw, vh) = dom::viewport_size(&w);
            pointer
                .borrow_mut()
                .set_raw_from_client(t.client_x() as f32, t.client_y() as f32, vw, vh);
        }
    });
    vec![mouse, touch]
}

/// Feature cards lean toward the pointer and settle back on leave.
pub fn wire_card_tilt(animator: &Rc<RefCell<DomAnimator>>) -> Vec<Listener> {
    let cards = animator.borrow().cards().to_vec();
    let mut out = Vec::with_capacity(cards.len() * 2);
    for (el, target) in cards {
        let a = animator.clone();
        let card = el.clone();
        out.push(Listener::new(&el, "mousemove", move |ev: web::MouseEvent| {
            let rect = dom::client_rect(&card);
            a.borrow_mut()
                .tilt(target, rect, ev.client_x() as f32, ev.client_y() as f32);
        }));
        let a = animator.clone();
        out.push(Listener::new(&el, "mouseleave", move |_: web::MouseEvent| {
            a.borrow_mut().untilt(target);
        }));
    }
    out
}

pub fn wire_button_hover(animator: &Rc<RefCell<DomAnimator>>) -> Vec<Listener> {
    let buttons = animator.borrow().buttons().to_vec();
    let mut out = Vec::with_capacity(buttons.len() * 2);
    for (el, target) in buttons {
        let a = animator.clone();
        out.push(Listener::new(&el, "mouseenter", move |_: web::MouseEvent| {
            a.borrow_mut().hover_button(target, true);
        }));
        let a = animator.clone();
        out.push(Listener::new(&el, "mouseleave", move |_: web::MouseEvent| {
            a.borrow_mut().hover_button(target, false);
        }));
    }
    out
}
