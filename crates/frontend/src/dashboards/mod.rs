pub mod d601_forecast_demand;
