//! Loading a transport network from a JSON document and answering the
//! document's statistics requests.

mod document;
mod error;
mod stats;

pub use document::{BaseRequest, BusRequest, NetworkDocument, StopRequest};
pub use error::NetworkError;
pub use stats::{
    BusAnswer, RouteAnswer, RouteItemAnswer, StatAnswer, StatRequest, StatResponse, StopAnswer,
    answer_stat_request, answer_stat_requests,
};
