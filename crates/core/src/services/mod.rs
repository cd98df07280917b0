pub mod view_controller;
