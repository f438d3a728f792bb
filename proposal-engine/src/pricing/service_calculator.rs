//! Service Calculator
//!
//! Derive appointment count, client cost and staffing revenue for a single
//! service:
//! - Appointments: `floor(total_hours * 60 / app_time * num_pros)`
//! - Headshot: revenue = hours * pros * pro_hourly,
//!   cost = revenue + appointments * retouching_cost
//! - Generic: cost = hours * hourly_rate * pros,
//!   revenue = hours * pros * pro_hourly + early_arrival * pros
//! - Discount (percent, > 0 only) reduces cost, never revenue
//!
//! Amounts are computed in f64 in the order above and only the two
//! results are rounded to cents.

use shared::models::{Service, ServiceType};

use super::money::round_currency;

/// Derived metrics for one service
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ServiceResults {
    pub total_appointments: u64,
    /// Client-facing cost after discount
    pub service_cost: f64,
    /// Amount paid out to staff
    pub pro_revenue: f64,
}

impl ServiceResults {
    /// Overwrite the derived fields of `service`
    pub fn write_to(&self, service: &mut Service) {
        service.total_appointments = self.total_appointments;
        service.service_cost = self.service_cost;
        service.pro_revenue = self.pro_revenue;
    }
}

#[inline]
fn is_positive(value: f64) -> bool {
    value > 0.0
}

/// Calculate derived metrics for a service
///
/// Returns all zeros when `app_time`, `num_pros` or `total_hours` is
/// missing or not positive.
pub fn calculate_service_results(service: &Service) -> ServiceResults {
    if !is_positive(service.app_time)
        || !is_positive(service.num_pros)
        || !is_positive(service.total_hours)
    {
        return ServiceResults::default();
    }

    // Appointment math stays in f64: the count is truncated, not rounded
    let appts_per_hour_per_pro = 60.0 / service.app_time;
    let total_appts_per_hour = appts_per_hour_per_pro * service.num_pros;
    let total_appointments = (service.total_hours * total_appts_per_hour).floor() as u64;

    let hours = service.total_hours;
    let pros = service.num_pros;

    let (mut service_cost, pro_revenue) = match service.service_type {
        ServiceType::Headshot => {
            let pro_revenue = hours * pros * service.pro_hourly;
            let retouching = total_appointments as f64 * service.retouching_cost;
            (pro_revenue + retouching, pro_revenue)
        }
        ServiceType::Generic(_) => {
            let cost = hours * service.hourly_rate * pros;
            let revenue = hours * pros * service.pro_hourly + service.early_arrival * pros;
            (cost, revenue)
        }
    };

    if service.discount_percent > 0.0 {
        service_cost *= 1.0 - service.discount_percent / 100.0;
    }

    if !service_cost.is_finite() || !pro_revenue.is_finite() {
        tracing::warn!(
            service_type = %service.service_type,
            date = %service.date,
            "Service amounts overflowed, pricing at 0"
        );
    }

    ServiceResults {
        total_appointments,
        service_cost: round_currency(service_cost),
        pro_revenue: round_currency(pro_revenue),
    }
}
