//! `web-sys` has never bound the WebXR Hit Test API (`XRHitTestSource`,
//! `XRHitTestOptionsInit`, `XRHitTestResult`, and the `requestHitTestSource`
//! / `getHitTestResults` methods), so this module declares the same surface
//! by hand, matching the spec method names exactly.
use js_sys::{Array, Function, Object, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{XrFrame, XrPose, XrSession, XrSpace};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(extends = Object)]
    pub type XrHitTestSource;

    #[wasm_bindgen(extends = Object)]
    pub type XrHitTestOptionsInit;

    #[wasm_bindgen(extends = Object)]
    pub type XrHitTestResult;
}

impl XrHitTestOptionsInit {
    pub fn new(space: &XrSpace) -> Self {
        let obj = Object::new();
        Reflect::set(&obj, &JsValue::from_str("space"), space.as_ref()).unwrap();
        obj.unchecked_into()
    }
}

impl XrHitTestResult {
    pub fn get_pose(&self, base_space: &XrSpace) -> Option<XrPose> {
        let method = Reflect::get(self.as_ref(), &JsValue::from_str("getPose")).unwrap();
        let method: Function = method.unchecked_into();
        let result = method.call1(self.as_ref(), base_space.as_ref()).unwrap();
        if result.is_undefined() || result.is_null() {
            None
        } else {
            Some(result.unchecked_into())
        }
    }
}

pub fn request_hit_test_source(session: &XrSession, options: &XrHitTestOptionsInit) -> js_sys::Promise {
    let method = Reflect::get(session.as_ref(), &JsValue::from_str("requestHitTestSource")).unwrap();
    let method: Function = method.unchecked_into();
    method
        .call1(session.as_ref(), options.as_ref())
        .unwrap()
        .unchecked_into()
}

pub fn get_hit_test_results(frame: &XrFrame, source: &XrHitTestSource) -> Array {
    let method = Reflect::get(frame.as_ref(), &JsValue::from_str("getHitTestResults")).unwrap();
    let method: Function = method.unchecked_into();
    method
        .call1(frame.as_ref(), source.as_ref())
        .unwrap()
        .unchecked_into()
}
