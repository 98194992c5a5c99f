mod refresh_zones;

pub use refresh_zones::RefreshZonesUseCase;
