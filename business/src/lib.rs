pub mod application {
    pub mod content {
        pub mod generate;
    }
    pub mod page {
        pub mod publish;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod content {
        pub mod errors;
        pub mod model;
        pub mod services;
        pub mod use_cases {
            pub mod generate;
        }
    }
    pub mod page {
        pub mod model;
        pub mod repository;
        pub mod template;
        pub mod use_cases {
            pub mod publish;
        }
    }
}
