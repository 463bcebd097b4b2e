pub mod favourites_list;
pub mod grade_filter;
pub mod header;
pub mod map_view;
pub mod search_bar;
pub mod side_panel;
pub mod star_toggle;
pub mod type_filter;
