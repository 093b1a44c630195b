//! Application use cases.

mod tour;

pub use tour::{
    tour_create, tour_delete, tour_get, tour_list, tour_update_price, TourCreateReq,
    TourDeletedDto, TourDto, TourPriceReq,
};
