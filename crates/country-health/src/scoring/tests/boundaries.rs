use super::common::rating;
use crate::scoring::Indicator::*;
use crate::scoring::Rating::{Healthy, Unhealthy, Warning};

#[test]
fn life_expectancy_edges() {
    assert_eq!(rating(LifeExpectancy, 75.0), Healthy);
    assert_eq!(rating(LifeExpectancy, 74.999), Warning);
    assert_eq!(rating(LifeExpectancy, 65.0), Warning);
    assert_eq!(rating(LifeExpectancy, 64.999), Unhealthy);
}

#[test]
fn infant_mortality_edges() {
    assert_eq!(rating(InfantMortality, 9.999), Healthy);
    assert_eq!(rating(InfantMortality, 10.0), Warning);
    assert_eq!(rating(InfantMortality, 29.999), Warning);
    assert_eq!(rating(InfantMortality, 30.0), Unhealthy);
}

#[test]
fn fertility_edges() {
    assert_eq!(rating(FertilityRate, 1.299), Unhealthy);
    assert_eq!(rating(FertilityRate, 1.3), Warning);
    assert_eq!(rating(FertilityRate, 1.799), Warning);
    assert_eq!(rating(FertilityRate, 1.8), Healthy);
    assert_eq!(rating(FertilityRate, 2.5), Healthy);
    assert_eq!(rating(FertilityRate, 2.501), Warning);
    assert_eq!(rating(FertilityRate, 4.0), Warning);
    assert_eq!(rating(FertilityRate, 4.001), Unhealthy);
}

#[test]
fn median_age_edges() {
    assert_eq!(rating(MedianAge, 19.9), Unhealthy);
    assert_eq!(rating(MedianAge, 20.0), Warning);
    assert_eq!(rating(MedianAge, 24.9), Warning);
    assert_eq!(rating(MedianAge, 25.0), Healthy);
    assert_eq!(rating(MedianAge, 38.0), Healthy);
    assert_eq!(rating(MedianAge, 38.1), Warning);
    assert_eq!(rating(MedianAge, 45.0), Warning);
    assert_eq!(rating(MedianAge, 45.1), Unhealthy);
}

#[test]
fn natural_growth_edges() {
    assert_eq!(rating(NaturalGrowth, -0.1), Unhealthy);
    assert_eq!(rating(NaturalGrowth, 0.0), Warning);
    assert_eq!(rating(NaturalGrowth, 1.99), Warning);
    assert_eq!(rating(NaturalGrowth, 2.0), Healthy);
    assert_eq!(rating(NaturalGrowth, 15.0), Healthy);
    assert_eq!(rating(NaturalGrowth, 15.1), Warning);
    assert_eq!(rating(NaturalGrowth, 25.0), Warning);
    assert_eq!(rating(NaturalGrowth, 25.1), Unhealthy);
}

#[test]
fn dependency_ratio_edges() {
    assert_eq!(rating(DependencyRatio, 59.999), Healthy);
    assert_eq!(rating(DependencyRatio, 60.0), Warning);
    assert_eq!(rating(DependencyRatio, 79.999), Warning);
    assert_eq!(rating(DependencyRatio, 80.0), Unhealthy);
}

#[test]
fn gdp_growth_edges() {
    assert_eq!(rating(GdpGrowth, 2.001), Healthy);
    assert_eq!(rating(GdpGrowth, 2.0), Warning);
    assert_eq!(rating(GdpGrowth, 0.0), Warning);
    assert_eq!(rating(GdpGrowth, -0.001), Unhealthy);
}

#[test]
fn gdp_per_capita_edges() {
    assert_eq!(rating(GdpPerCapita, 20_000.0), Healthy);
    assert_eq!(rating(GdpPerCapita, 19_999.0), Warning);
    assert_eq!(rating(GdpPerCapita, 5_000.0), Warning);
    assert_eq!(rating(GdpPerCapita, 4_999.0), Unhealthy);
}

#[test]
fn inflation_edges() {
    assert_eq!(rating(Inflation, -0.1), Unhealthy);
    assert_eq!(rating(Inflation, 0.0), Warning);
    assert_eq!(rating(Inflation, 0.99), Warning);
    assert_eq!(rating(Inflation, 1.0), Healthy);
    assert_eq!(rating(Inflation, 3.0), Healthy);
    assert_eq!(rating(Inflation, 3.01), Warning);
    assert_eq!(rating(Inflation, 6.0), Warning);
    assert_eq!(rating(Inflation, 6.01), Unhealthy);
}

#[test]
fn unemployment_edges() {
    assert_eq!(rating(Unemployment, 4.99), Healthy);
    assert_eq!(rating(Unemployment, 5.0), Warning);
    assert_eq!(rating(Unemployment, 10.0), Warning);
    assert_eq!(rating(Unemployment, 10.01), Unhealthy);
}

#[test]
fn public_debt_edges() {
    assert_eq!(rating(PublicDebt, 59.9), Healthy);
    assert_eq!(rating(PublicDebt, 60.0), Warning);
    assert_eq!(rating(PublicDebt, 90.0), Warning);
    assert_eq!(rating(PublicDebt, 90.1), Unhealthy);
}

#[test]
fn current_account_edges() {
    assert_eq!(rating(CurrentAccount, 0.01), Healthy);
    assert_eq!(rating(CurrentAccount, 0.0), Warning);
    assert_eq!(rating(CurrentAccount, -3.0), Warning);
    assert_eq!(rating(CurrentAccount, -3.01), Unhealthy);
}

#[test]
fn detail_text_tracks_sub_bands() {
    assert_eq!(LifeExpectancy.rate(76.2).detail, "Strong healthcare outcomes");
    assert_eq!(FertilityRate.rate(1.5).detail, "Below replacement level");
    assert_eq!(FertilityRate.rate(3.0).detail, "Above replacement level");
    assert_eq!(Inflation.rate(-0.5).detail, "Deflation risk");
    assert_eq!(Inflation.rate(0.5).detail, "Price stability");
    assert_eq!(Inflation.rate(7.5).detail, "High inflation");
    assert_eq!(MedianAge.rate(42.0).detail, "Aging population");
    assert_eq!(MedianAge.rate(15.0).detail, "Very young — high youth dependency");
    assert_eq!(MedianAge.rate(50.0).detail, "Severe aging — shrinking workforce");
    assert_eq!(
        DependencyRatio.rate(85.0).detail,
        "High dependency — workforce strain"
    );
}
