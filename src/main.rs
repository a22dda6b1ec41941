use dotenv::dotenv;
use human_panic::setup_panic;
use tracing::{debug, error, info, warn};

// 从 lib.rs 导入模块
use tuition_desk::config::AppConfig;
use tuition_desk::models::courses::requests::CourseFilters;
use tuition_desk::runtime::lifetime;
use tuition_desk::services::{CourseService, DashboardService};
use tuition_desk::utils::{balance_label, effective_course_status, format_balance};

#[tokio::main]
async fn main() {
    dotenv().ok();

    // 记录程序启动时间
    let start_datetime = chrono::Utc::now();

    // 初始化配置
    setup_panic!();
    if let Err(e) = AppConfig::init() {
        eprintln!("Failed to initialize configuration: {e}");
        std::process::exit(1);
    }
    let config = AppConfig::get();

    // 初始化日志
    let stdout_log = std::io::stdout();
    let (non_blocking_writer, _guard) = tracing_appender::non_blocking(stdout_log);
    let filter = tracing_subscriber::EnvFilter::new(&config.app.log_level);
    let tracing_format = tracing_subscriber::fmt::format()
        .with_level(true)
        .with_ansi(true);

    let tracing_builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(non_blocking_writer)
        .event_format(tracing_format);

    if config.is_development() {
        tracing_builder
            .with_file(true)
            .with_line_number(true)
            .init();
    } else {
        tracing_builder.json().init();
    }

    // 打印信息
    warn!(
        "Starting {}...
        Project: {}
        Version: {}
        Authors: {}",
        config.app.system_name,
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        env!("CARGO_PKG_AUTHORS")
    );

    let startup = match lifetime::startup::prepare_client_startup() {
        Ok(startup) => startup,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    debug!(
        "Startup completed in {} ms",
        chrono::Utc::now()
            .signed_duration_since(start_datetime)
            .num_milliseconds()
    );

    // 看板概要
    let mut dashboard = DashboardService::new(startup.services.clone());
    if dashboard.load_summary().await.is_ok() {
        let summary = &dashboard.summary;
        info!(
            "在读学员 {} 人（本月新增 {}），本月消课 {} 节（环比 {}），剩余总课时 {} 节，欠费 {} 人，预警 {} 人",
            summary.total_students,
            summary.new_students_this_month,
            summary.monthly_hours,
            summary.month_over_month,
            summary.total_remaining_hours,
            summary.total_arrears,
            summary.total_warning
        );
    }

    // 课时不足的课程
    let threshold = config.ui.low_balance_threshold;
    let mut courses = CourseService::new(startup.services);
    let filters = CourseFilters {
        balance_max: Some(threshold - 1),
        ..Default::default()
    };
    if courses.apply_filters(filters).await.is_ok() {
        info!("课时不足的课程共 {} 门", courses.page.total);
        for course in &courses.items {
            let student = course
                .student
                .as_ref()
                .map(|s| s.name.as_str())
                .unwrap_or("-");
            info!(
                "{} / {} / {}: {} 节 [{}] {}",
                student,
                course.subject.name,
                course.teacher.name,
                format_balance(course.balance),
                balance_label(course.balance, threshold),
                effective_course_status(course).label
            );
        }
    }
}
