//! Entry point for the WASM application

pub fn main() {
    red_excel::start();
}
