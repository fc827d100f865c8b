pub mod application {
    pub mod cart {
        pub mod add_item;
        pub mod clear;
        pub mod get;
        pub mod remove_line;
        pub mod retry;
        pub mod update_quantity;
        #[cfg(test)]
        mod scenarios;
    }
    pub mod product {
        pub mod create;
        pub mod get_all;
        pub mod get_by_id;
    }
    pub mod user {
        pub mod login;
        pub mod logout;
        pub mod register;
        pub mod verify_otp;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod shared {
        pub mod value_objects;
    }
    pub mod cart {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod value_objects;
        pub mod use_cases {
            pub mod add_item;
            pub mod clear;
            pub mod get;
            pub mod remove_line;
            pub mod update_quantity;
        }
    }
    pub mod product {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod create;
            pub mod get_all;
            pub mod get_by_id;
        }
    }
    pub mod user {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod services;
        pub mod use_cases {
            pub mod login;
            pub mod logout;
            pub mod register;
            pub mod verify_otp;
        }
    }
}

#[cfg(test)]
pub(crate) mod test_doubles;
