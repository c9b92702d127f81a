pub mod config;

pub mod modules {
    pub mod subscriptions {
        pub mod core {
            pub mod event;
            pub mod subscription;
        }
        pub mod ports;
        pub mod application {
            pub mod service;
            pub mod status;
        }
        pub mod adapters {
            pub mod outbound {
                pub mod in_memory;
            }
            pub mod inbound {
                pub mod http {
                    pub mod cancel_subscription;
                    pub mod event_status;
                    pub mod increase_capacity;
                    pub mod register_event;
                    pub mod subscribe_user;
                }
            }
        }
    }
}

pub mod shell;
