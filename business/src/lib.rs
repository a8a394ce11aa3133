pub mod application {
    pub mod wishlist {
        pub mod add_item;
        pub mod clear;
        pub mod get;
        pub mod move_to_cart;
        pub mod remove_item;
        #[cfg(test)]
        mod scenarios;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod shared {
        pub mod value_objects;
    }
    pub mod wishlist {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod services;
        pub mod value_objects;
        pub mod use_cases {
            pub mod add_item;
            pub mod clear;
            pub mod get;
            pub mod move_to_cart;
            pub mod remove_item;
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support;
