use docket_core::entities::NewCase;
use docket_db::DocketDb;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::{parse_datetime, parse_optional_date};
use crate::output::output;

/// Borrowed view of `docket case create` arguments.
pub struct CreateArgs<'a> {
    pub case_number: &'a str,
    pub client: &'a str,
    pub address: &'a str,
    pub access_code: &'a str,
    pub tenant: Option<&'a str>,
    pub county: Option<&'a str>,
    pub court: Option<&'a str>,
    pub case_type: Option<&'a str>,
    pub status: Option<&'a str>,
    pub step: Option<i64>,
    pub total_steps: Option<i64>,
    pub filed: Option<&'a str>,
    pub notice_served: Option<&'a str>,
    pub hearing: Option<&'a str>,
    pub response_deadline: Option<&'a str>,
    pub payment: Option<&'a str>,
}

pub async fn run(args: &CreateArgs<'_>, db: &DocketDb, flags: &GlobalFlags) -> anyhow::Result<()> {
    let new = build_case(args)?;
    let case = db.create_case(new).await?;
    output(&case, flags.format)
}

fn build_case(args: &CreateArgs<'_>) -> anyhow::Result<NewCase> {
    let mut new = NewCase::new(args.case_number, args.client, args.address, args.access_code);

    if let Some(tenant) = args.tenant {
        new = new.tenant_name(tenant);
    }
    if let Some(county) = args.county {
        new = new.county(county);
    }
    if let Some(court) = args.court {
        new = new.court(court);
    }
    if let Some(case_type) = args.case_type {
        new = new.case_type(case_type);
    }
    if let Some(status) = args.status {
        new = new.status(status);
    }
    if args.step.is_some() || args.total_steps.is_some() {
        new = new.steps(
            args.step.unwrap_or(NewCase::DEFAULT_CURRENT_STEP),
            args.total_steps.unwrap_or(NewCase::DEFAULT_TOTAL_STEPS),
        );
    }
    if let Some(filed) = parse_optional_date(args.filed, "filed")? {
        new = new.filed_date(filed);
    }
    if let Some(served) = parse_optional_date(args.notice_served, "notice_served")? {
        new = new.notice_served_date(served);
    }
    if let Some(hearing) = args.hearing {
        new = new.hearing_date(parse_datetime(hearing, "hearing")?);
    }
    if let Some(deadline) = parse_optional_date(args.response_deadline, "response_deadline")? {
        new = new.response_deadline(deadline);
    }
    if let Some(payment) = args.payment {
        new = new.payment_status(payment);
    }
    Ok(new)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    use super::{CreateArgs, build_case};

    fn minimal() -> CreateArgs<'static> {
        CreateArgs {
            case_number: "30001",
            client: "Landlord LLC",
            address: "42 Pine St, Dallas, TX 75203",
            access_code: "pine42",
            tenant: None,
            county: None,
            court: None,
            case_type: None,
            status: None,
            step: None,
            total_steps: None,
            filed: None,
            notice_served: None,
            hearing: None,
            response_deadline: None,
            payment: None,
        }
    }

    #[test]
    fn defaults_apply_when_flags_missing() {
        let new = build_case(&minimal()).unwrap();
        assert_eq!(new.county, "Dallas");
        assert_eq!(new.court, "JP 4-1");
        assert_eq!(new.current_step, 1);
        assert_eq!(new.total_steps, 7);
        assert_eq!(new.tenant_name, None);
        assert_eq!(new.hearing_date, None);
    }

    #[test]
    fn overrides_are_applied() {
        let args = CreateArgs {
            tenant: Some("Tom Tenant"),
            step: Some(3),
            filed: Some("2023-03-20"),
            payment: Some("Paid"),
            ..minimal()
        };
        let new = build_case(&args).unwrap();
        assert_eq!(new.tenant_name.as_deref(), Some("Tom Tenant"));
        assert_eq!(new.current_step, 3);
        assert_eq!(new.total_steps, 7);
        assert_eq!(new.filed_date, NaiveDate::from_ymd_opt(2023, 3, 20));
        assert_eq!(new.payment_status, "Paid");
    }

    #[test]
    fn malformed_date_is_rejected() {
        let args = CreateArgs {
            response_deadline: Some("May 12"),
            ..minimal()
        };
        let err = build_case(&args).unwrap_err();
        assert!(err.to_string().contains("response_deadline"));
    }
}
