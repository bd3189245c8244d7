mod observer;
mod predictor;

pub use observer::IRequestObserver;
pub use predictor::IPushPredictor;
