pub mod modules {
    pub mod quiz {
        pub mod core {
            pub mod answer;
            pub mod catalog;
            pub mod events;
            pub mod evolve;
            pub mod identity;
            pub mod question;
            pub mod state;
        }
        pub mod use_cases {
            pub mod errors;
            pub mod welcome {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod start_quiz {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod next_question {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod fetch_question {
                pub mod lookup;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod submit_answer {
                pub mod decide;
                pub mod decision;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod credentials;
                pub mod progress_store;
                pub mod progress_store_in_memory;
            }
        }
    }
}

pub mod shell;
