pub mod modules {
    pub mod bookings {
        pub mod core {
            pub mod booking;
            pub mod view;
            pub mod view_params;
            pub mod view_state;
        }
        pub mod use_cases {
            pub mod list_bookings {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
                pub mod queries_port;
                pub mod query;
            }
        }
        pub mod adapters {
            pub mod mappers {
                pub mod raw_booking_to_booking_record;
            }
            pub mod outbound {
                pub mod booking_feed_http;
                pub mod booking_feed_in_memory;
                pub mod raw_booking;
            }
        }
    }
}

pub mod shell;
