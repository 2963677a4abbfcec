//! Built-in use-case records.
//!
//! Catalog order matters: search tie-breaking preserves it.

use crate::types::{Category, Complexity, ImplementationTime, UseCase};

fn strs(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

#[allow(clippy::too_many_lines)]
pub fn builtin() -> Vec<UseCase> {
    vec![
        // Budgeting & Planning
        UseCase {
            id: "budget-001".into(),
            title: "Automated Budget Consolidation".into(),
            description: "Use an AI coding assistant to automatically consolidate departmental budgets from multiple Excel files, reconcile submissions, identify inconsistencies, and generate a unified corporate budget.".into(),
            category: Category::Budgeting,
            subcategories: strs(&["consolidation", "departmental budgets"]),
            complexity: Complexity::Intermediate,
            implementation_time: ImplementationTime::Hours,
            benefits: strs(&[
                "Reduce budget consolidation time by 80%",
                "Automatic inconsistency detection",
                "Standardized output format",
                "Audit trail of all changes",
            ]),
            example_prompts: strs(&[
                "Consolidate all budget files in the /budgets folder, identify any departments with unrealistic assumptions, and create a summary report",
                "Read the departmental budget submissions and flag any that exceed the 5% growth guideline",
                "Create a Python script to merge quarterly budget files and highlight variances over $10,000",
            ]),
            tools_used: strs(&["Python", "openpyxl", "pandas", "Excel"]),
            source: "Anthropic Financial Services".into(),
            source_url: Some("https://www.anthropic.com/news/advancing-claude-for-financial-services".into()),
            productivity_gain: Some("80% reduction in consolidation time".into()),
            tags: strs(&["automation", "consolidation", "excel", "multi-department"]),
        },
        UseCase {
            id: "budget-002".into(),
            title: "Driver-Based Budget Model Creation".into(),
            description: "Build sophisticated driver-based budget models that automatically translate operational assumptions (customer growth, production volumes, market share) into comprehensive financial plans.".into(),
            category: Category::Budgeting,
            subcategories: strs(&["driver-based planning", "operational modeling"]),
            complexity: Complexity::Advanced,
            implementation_time: ImplementationTime::Days,
            benefits: strs(&[
                "Dynamic budget adjustments based on drivers",
                "Better alignment between operations and finance",
                "Faster scenario analysis",
                "Improved forecast accuracy",
            ]),
            example_prompts: strs(&[
                "Create a driver-based budget model where revenue is calculated from customer count × average order value × purchase frequency",
                "Build an Excel model that links headcount growth to revenue targets with automatic COGS calculation",
                "Design a budget template with linked drivers for SaaS metrics: ARR, churn, expansion revenue",
            ]),
            tools_used: strs(&["Excel", "Python", "Financial modeling"]),
            source: "Cube Software".into(),
            source_url: Some("https://www.cubesoftware.com/blog/ai-for-fpa-financial-planning-analysis".into()),
            productivity_gain: Some("50% faster budget cycle".into()),
            tags: strs(&["driver-based", "operational", "SaaS", "modeling"]),
        },
        UseCase {
            id: "budget-003".into(),
            title: "Zero-Based Budget Analysis".into(),
            description: "Implement zero-based budgeting analysis by having the assistant review every expense line item, question historical allocations, and suggest optimizations based on actual needs.".into(),
            category: Category::Budgeting,
            subcategories: strs(&["zero-based budgeting", "cost optimization"]),
            complexity: Complexity::Intermediate,
            implementation_time: ImplementationTime::Hours,
            benefits: strs(&[
                "Identify unnecessary expenses",
                "Data-driven cost reduction",
                "Better resource allocation",
                "Challenge status quo spending",
            ]),
            example_prompts: strs(&[
                "Analyze the marketing budget line by line and identify any items that haven't shown ROI in the past 2 years",
                "Review all G&A expenses and flag items that have grown faster than revenue",
                "Create a zero-based budget template for the IT department with justification requirements",
            ]),
            tools_used: strs(&["Excel", "Python", "pandas"]),
            source: "FP&A Trends".into(),
            source_url: Some("https://fpa-trends.com/article/how-agentic-ai-powering-next-generation-fpa".into()),
            productivity_gain: None,
            tags: strs(&["ZBB", "cost-reduction", "analysis"]),
        },
        // Forecasting
        UseCase {
            id: "forecast-001".into(),
            title: "Automated Rolling Forecast Updates".into(),
            description: "Create scripts that automatically update rolling forecasts with the latest actuals, recalculate projections, and highlight significant changes from previous forecasts.".into(),
            category: Category::Forecasting,
            subcategories: strs(&["rolling forecast", "automation"]),
            complexity: Complexity::Intermediate,
            implementation_time: ImplementationTime::Hours,
            benefits: strs(&[
                "Always-current forecasts",
                "Reduced manual data entry",
                "Automatic variance flagging",
                "Consistent methodology",
            ]),
            example_prompts: strs(&[
                "Update the rolling forecast model with Q3 actuals and extend the projection to Q4 next year",
                "Create a Python script that pulls actuals from our data warehouse and updates the forecast Excel file weekly",
                "Build an automated workflow that compares each forecast iteration and reports changes over 5%",
            ]),
            tools_used: strs(&["Python", "Excel", "SQL", "pandas"]),
            source: "Cube Software".into(),
            source_url: Some("https://www.cubesoftware.com/blog/ai-tools-for-fpa".into()),
            productivity_gain: Some("Quarterly prep time reduced to hours".into()),
            tags: strs(&["rolling", "automation", "actuals", "updates"]),
        },
        UseCase {
            id: "forecast-002".into(),
            title: "Revenue Forecasting with ML".into(),
            description: "Build machine learning models for revenue forecasting that analyze historical patterns, seasonality, and external factors to generate more accurate predictions.".into(),
            category: Category::Forecasting,
            subcategories: strs(&["machine learning", "revenue"]),
            complexity: Complexity::Advanced,
            implementation_time: ImplementationTime::Days,
            benefits: strs(&[
                "15-30% improvement in forecast accuracy",
                "Automatic pattern detection",
                "Seasonality adjustment",
                "Confidence intervals included",
            ]),
            example_prompts: strs(&[
                "Create a time series model to forecast next quarter's revenue using Prophet library",
                "Analyze 3 years of sales data and build a model that accounts for seasonality and trend",
                "Build a revenue forecasting model that incorporates macroeconomic indicators",
            ]),
            tools_used: strs(&["Python", "Prophet", "scikit-learn", "pandas"]),
            source: "Anthropic Financial Services".into(),
            source_url: Some("https://www.anthropic.com/news/claude-for-financial-services".into()),
            productivity_gain: Some("65% of teams rate AI forecasts as good/great vs 42% without".into()),
            tags: strs(&["ML", "time-series", "revenue", "prediction"]),
        },
        UseCase {
            id: "forecast-003".into(),
            title: "Cash Flow Forecasting Automation".into(),
            description: "Automate cash flow forecasting by analyzing AR/AP aging, payment patterns, and seasonal variations to predict future cash positions.".into(),
            category: Category::Forecasting,
            subcategories: strs(&["cash flow", "treasury"]),
            complexity: Complexity::Intermediate,
            implementation_time: ImplementationTime::Hours,
            benefits: strs(&[
                "Better cash management",
                "Early warning for cash shortfalls",
                "Optimized working capital",
                "Improved vendor payment timing",
            ]),
            example_prompts: strs(&[
                "Analyze AR aging report and predict collections for the next 90 days based on historical payment patterns",
                "Create a 13-week cash flow forecast model that incorporates AP schedules and expected collections",
                "Build a cash flow model that flags potential liquidity issues 30 days in advance",
            ]),
            tools_used: strs(&["Excel", "Python", "SQL"]),
            source: "Oracle".into(),
            source_url: Some("https://www.oracle.com/erp/ai-driven-financial-planning-and-analysis/".into()),
            productivity_gain: None,
            tags: strs(&["cash-flow", "treasury", "working-capital", "liquidity"]),
        },
        UseCase {
            id: "forecast-004".into(),
            title: "Expense Forecasting with Trend Analysis".into(),
            description: "Develop expense forecasting models that identify spending trends, detect anomalies, and project future costs based on historical patterns and known commitments.".into(),
            category: Category::Forecasting,
            subcategories: strs(&["expense", "trend analysis"]),
            complexity: Complexity::Intermediate,
            implementation_time: ImplementationTime::Hours,
            benefits: strs(&[
                "Accurate expense projections",
                "Anomaly detection",
                "Better cost management",
                "Early warning on cost overruns",
            ]),
            example_prompts: strs(&[
                "Analyze the past 24 months of operating expenses and project next year's costs by category",
                "Identify expense categories with abnormal growth patterns in the current quarter",
                "Create an expense forecast that accounts for known headcount additions and contract renewals",
            ]),
            tools_used: strs(&["Python", "pandas", "Excel"]),
            source: "KPMG".into(),
            source_url: Some("https://kpmg.com/us/en/articles/2025/future-of-fpa-with-ai.html".into()),
            productivity_gain: None,
            tags: strs(&["expenses", "trends", "cost-management"]),
        },
        // Variance Analysis
        UseCase {
            id: "variance-001".into(),
            title: "Automated Variance Commentary Generation".into(),
            description: "Automatically generate variance explanations and commentary for budget vs actual reports, identifying root causes and suggesting corrective actions.".into(),
            category: Category::VarianceAnalysis,
            subcategories: strs(&["commentary", "root cause"]),
            complexity: Complexity::Intermediate,
            implementation_time: ImplementationTime::Hours,
            benefits: strs(&[
                "Save hours on variance explanations",
                "Consistent commentary quality",
                "Faster month-end close",
                "Better root cause identification",
            ]),
            example_prompts: strs(&[
                "Analyze the budget vs actual report and generate executive-level variance commentary for items over $50K",
                "Review Q3 variances and identify the top 5 drivers of the revenue shortfall",
                "Generate variance explanations for the board deck, focusing on EBITDA bridge items",
            ]),
            tools_used: strs(&["Excel", "Python", "pandas"]),
            source: "Aleph".into(),
            source_url: Some("https://www.getaleph.com/answers/ai-fpa-software-variance-detection".into()),
            productivity_gain: Some("90% reduction in commentary writing time".into()),
            tags: strs(&["commentary", "automation", "month-end", "reporting"]),
        },
        UseCase {
            id: "variance-002".into(),
            title: "Real-Time Variance Monitoring".into(),
            description: "Build monitoring scripts that continuously compare actuals to budget/forecast and alert the team when material variances occur.".into(),
            category: Category::VarianceAnalysis,
            subcategories: strs(&["monitoring", "alerts"]),
            complexity: Complexity::Intermediate,
            implementation_time: ImplementationTime::Hours,
            benefits: strs(&[
                "Proactive issue identification",
                "Faster response to variances",
                "Reduced surprise at month-end",
                "Better cost control",
            ]),
            example_prompts: strs(&[
                "Create a Python script that checks daily sales against forecast and alerts if we're tracking more than 10% below",
                "Build a monitoring dashboard that flags expense categories exceeding 90% of monthly budget",
                "Set up automated alerts when any cost center exceeds 80% of quarterly budget mid-month",
            ]),
            tools_used: strs(&["Python", "SQL", "APIs", "Slack/Email integration"]),
            source: "Surfside Capital Advisors".into(),
            source_url: Some("https://www.surfcapadvisors.com/2025/10/02/how-has-ai-changed-fpa/".into()),
            productivity_gain: None,
            tags: strs(&["monitoring", "alerts", "real-time", "proactive"]),
        },
        UseCase {
            id: "variance-003".into(),
            title: "Multi-Dimensional Variance Decomposition".into(),
            description: "Perform sophisticated variance analysis that decomposes variances by multiple dimensions: price/volume, mix effects, currency impacts, and timing differences.".into(),
            category: Category::VarianceAnalysis,
            subcategories: strs(&["decomposition", "multi-dimensional"]),
            complexity: Complexity::Advanced,
            implementation_time: ImplementationTime::Days,
            benefits: strs(&[
                "Deeper variance understanding",
                "Separate controllable from uncontrollable factors",
                "Better performance evaluation",
                "More actionable insights",
            ]),
            example_prompts: strs(&[
                "Decompose the gross margin variance into price, volume, and mix effects for each product line",
                "Analyze the revenue variance and separate the impact of currency fluctuations from operational performance",
                "Create a variance waterfall showing contribution from each business unit and variance driver",
            ]),
            tools_used: strs(&["Excel", "Python", "pandas"]),
            source: "Abacum".into(),
            source_url: Some("https://www.abacum.ai/blog/how-to-use-budget-vs-actuals-variance-analysis-to-improve-fp-a-outcomes".into()),
            productivity_gain: None,
            tags: strs(&["decomposition", "price-volume", "mix", "currency"]),
        },
        // Financial Modeling
        UseCase {
            id: "model-001".into(),
            title: "DCF Model Development".into(),
            description: "Build or enhance discounted cash flow (DCF) valuation models with automated sensitivity analysis and scenario comparisons.".into(),
            category: Category::FinancialModeling,
            subcategories: strs(&["valuation", "DCF"]),
            complexity: Complexity::Advanced,
            implementation_time: ImplementationTime::Days,
            benefits: strs(&[
                "Consistent valuation methodology",
                "Automated sensitivity tables",
                "Quick scenario comparisons",
                "Professional output format",
            ]),
            example_prompts: strs(&[
                "Build a DCF model for the acquisition target with a 5-year projection period and terminal value",
                "Add sensitivity analysis to the DCF showing value impact of WACC and terminal growth rate changes",
                "Create a DCF template with automated WACC calculation and scenario toggles",
            ]),
            tools_used: strs(&["Excel", "Python", "VBA"]),
            source: "Anthropic Financial Services".into(),
            source_url: Some("https://www.anthropic.com/news/advancing-claude-for-financial-services".into()),
            productivity_gain: Some("Passed 5 of 7 Financial Modeling World Cup levels".into()),
            tags: strs(&["DCF", "valuation", "M&A", "investment-analysis"]),
        },
        UseCase {
            id: "model-002".into(),
            title: "Three-Statement Model Construction".into(),
            description: "Create integrated three-statement financial models (Income Statement, Balance Sheet, Cash Flow) with proper linkages and circular reference handling.".into(),
            category: Category::FinancialModeling,
            subcategories: strs(&["three-statement", "integration"]),
            complexity: Complexity::Advanced,
            implementation_time: ImplementationTime::Days,
            benefits: strs(&[
                "Proper statement integration",
                "Automatic balancing",
                "Scenario flexibility",
                "Audit-ready structure",
            ]),
            example_prompts: strs(&[
                "Build a three-statement model with working capital schedules and debt amortization",
                "Create an integrated financial model for a SaaS company with deferred revenue accounting",
                "Debug my three-statement model - the balance sheet doesn't balance after adding the debt schedule",
            ]),
            tools_used: strs(&["Excel", "VBA"]),
            source: "FundamentalLabs Excel Agent".into(),
            source_url: Some("https://www.anthropic.com/news/advancing-claude-for-financial-services".into()),
            productivity_gain: Some("83% accuracy on complex Excel tasks".into()),
            tags: strs(&["three-statement", "integration", "balance-sheet"]),
        },
        UseCase {
            id: "model-003".into(),
            title: "LBO Model Development".into(),
            description: "Create leveraged buyout (LBO) models with debt schedules, returns analysis, and sensitivity to entry/exit multiples.".into(),
            category: Category::FinancialModeling,
            subcategories: strs(&["LBO", "private equity"]),
            complexity: Complexity::Expert,
            implementation_time: ImplementationTime::Days,
            benefits: strs(&[
                "Quick deal evaluation",
                "Returns optimization",
                "Debt capacity analysis",
                "Sensitivity to key assumptions",
            ]),
            example_prompts: strs(&[
                "Build an LBO model with senior debt, mezzanine, and equity tranches",
                "Create an LBO returns analysis with IRR sensitivity to entry multiple and exit timing",
                "Add a debt schedule to my LBO model with cash sweep and mandatory amortization",
            ]),
            tools_used: strs(&["Excel", "VBA"]),
            source: "F9 Finance".into(),
            source_url: Some("https://www.f9finance.com/claude-for-finance/".into()),
            productivity_gain: None,
            tags: strs(&["LBO", "PE", "returns", "debt-schedule"]),
        },
        UseCase {
            id: "model-004".into(),
            title: "Formula Debugging and Optimization".into(),
            description: "Debug complex Excel formulas, identify circular references, and optimize model performance by improving formula efficiency.".into(),
            category: Category::FinancialModeling,
            subcategories: strs(&["debugging", "optimization"]),
            complexity: Complexity::Intermediate,
            implementation_time: ImplementationTime::Hours,
            benefits: strs(&[
                "Fix broken formulas quickly",
                "Improve model performance",
                "Reduce file size",
                "Better formula transparency",
            ]),
            example_prompts: strs(&[
                "Debug this SUMIFS formula that's returning #VALUE! error",
                "Optimize my model - it takes 30 seconds to recalculate",
                "Find and fix all circular references in my financial model",
                "Convert these nested IF statements to a cleaner INDEX/MATCH approach",
            ]),
            tools_used: strs(&["Excel", "VBA"]),
            source: "Claude in Excel".into(),
            source_url: Some("https://claude.com/claude-in-excel".into()),
            productivity_gain: None,
            tags: strs(&["debugging", "formulas", "optimization", "excel"]),
        },
        // Reporting
        UseCase {
            id: "report-001".into(),
            title: "Automated Management Report Generation".into(),
            description: "Generate comprehensive management reports automatically from raw financial data, including variance analysis, KPI metrics, and executive commentary.".into(),
            category: Category::Reporting,
            subcategories: strs(&["management reporting", "automation"]),
            complexity: Complexity::Intermediate,
            implementation_time: ImplementationTime::Hours,
            benefits: strs(&[
                "Consistent report formatting",
                "Faster report production",
                "Reduced manual errors",
                "More time for analysis",
            ]),
            example_prompts: strs(&[
                "Create a monthly management report from the trial balance data with P&L, balance sheet, and KPIs",
                "Generate an executive summary for the board highlighting the top 3 financial story points this quarter",
                "Build a report template that automatically populates with data from our ERP export",
            ]),
            tools_used: strs(&["Excel", "Python", "pandas", "reportlab"]),
            source: "Anthropic Financial Services".into(),
            source_url: Some("https://www.anthropic.com/news/claude-for-financial-services".into()),
            productivity_gain: Some("NBIM achieved 20% productivity gains (213,000 hours)".into()),
            tags: strs(&["management-reports", "automation", "executive-summary"]),
        },
        UseCase {
            id: "report-002".into(),
            title: "KPI Dashboard Creation".into(),
            description: "Design and build KPI dashboards that track financial and operational metrics with automatic data refresh and trend visualization.".into(),
            category: Category::Reporting,
            subcategories: strs(&["dashboards", "KPIs"]),
            complexity: Complexity::Intermediate,
            implementation_time: ImplementationTime::Hours,
            benefits: strs(&[
                "Real-time visibility",
                "Self-service analytics",
                "Consistent metric definitions",
                "Mobile accessibility",
            ]),
            example_prompts: strs(&[
                "Create a Python dashboard showing revenue, gross margin, and operating income trends",
                "Build an Excel dashboard with conditional formatting for KPI status indicators",
                "Design a SaaS metrics dashboard tracking MRR, churn, CAC, and LTV",
            ]),
            tools_used: strs(&["Python", "plotly", "Excel", "Power BI"]),
            source: "Data Studios".into(),
            source_url: Some("https://www.datastudios.org/post/claude-and-spreadsheets-advanced-data-analysis-with-ai-in-2025".into()),
            productivity_gain: None,
            tags: strs(&["dashboard", "KPI", "visualization", "metrics"]),
        },
        UseCase {
            id: "report-003".into(),
            title: "Board Presentation Automation".into(),
            description: "Automate the creation of board presentations by pulling financial data, generating charts, and populating slides with key insights.".into(),
            category: Category::Reporting,
            subcategories: strs(&["board reporting", "presentations"]),
            complexity: Complexity::Intermediate,
            implementation_time: ImplementationTime::Hours,
            benefits: strs(&[
                "Consistent branding",
                "Faster deck preparation",
                "Dynamic chart updates",
                "Version control",
            ]),
            example_prompts: strs(&[
                "Create a PowerPoint slide deck with Q3 financial results and charts",
                "Update the board presentation template with latest month-end numbers",
                "Generate a financial summary slide with waterfall chart for EBITDA bridge",
            ]),
            tools_used: strs(&["Python", "python-pptx", "Excel"]),
            source: "Claude Code Interpreter".into(),
            source_url: Some("https://simonwillison.net/2025/Sep/9/claude-code-interpreter/".into()),
            productivity_gain: None,
            tags: strs(&["board", "presentation", "powerpoint", "charts"]),
        },
        // Data Integration
        UseCase {
            id: "data-001".into(),
            title: "ERP Data Extraction and Transformation".into(),
            description: "Build scripts to extract data from ERP systems, transform it into analysis-ready format, and load into Excel or data warehouses.".into(),
            category: Category::DataIntegration,
            subcategories: strs(&["ERP", "ETL"]),
            complexity: Complexity::Intermediate,
            implementation_time: ImplementationTime::Hours,
            benefits: strs(&[
                "Automated data extraction",
                "Consistent data formats",
                "Reduced manual data entry",
                "Audit trail",
            ]),
            example_prompts: strs(&[
                "Create a Python script to extract GL data from our SAP export and format for the budget model",
                "Build an ETL pipeline that pulls sales data from NetSuite and loads it into our forecast template",
                "Transform the Oracle export into a pivot-ready format with proper account hierarchy",
            ]),
            tools_used: strs(&["Python", "pandas", "SQL", "APIs"]),
            source: "Anthropic Financial Services".into(),
            source_url: Some("https://www.anthropic.com/news/advancing-claude-for-financial-services".into()),
            productivity_gain: None,
            tags: strs(&["ERP", "ETL", "SAP", "NetSuite", "Oracle"]),
        },
        UseCase {
            id: "data-002".into(),
            title: "Data Warehouse Query Automation".into(),
            description: "Generate and execute SQL queries against Snowflake or Databricks to pull financial data for analysis and reporting.".into(),
            category: Category::DataIntegration,
            subcategories: strs(&["data warehouse", "SQL"]),
            complexity: Complexity::Intermediate,
            implementation_time: ImplementationTime::Hours,
            benefits: strs(&[
                "Self-service data access",
                "Complex query generation",
                "Faster data retrieval",
                "Reduced IT dependency",
            ]),
            example_prompts: strs(&[
                "Write a SQL query to pull monthly revenue by product category from Snowflake for the past 2 years",
                "Create a query that calculates customer lifetime value from our data warehouse",
                "Generate SQL to extract cost center expenses with department hierarchy from Databricks",
            ]),
            tools_used: strs(&["SQL", "Python", "Snowflake", "Databricks"]),
            source: "Anthropic Financial Services".into(),
            source_url: Some("https://www.anthropic.com/news/claude-for-financial-services".into()),
            productivity_gain: Some("NBIM can seamlessly query their Snowflake data warehouse".into()),
            tags: strs(&["SQL", "Snowflake", "Databricks", "data-warehouse"]),
        },
        UseCase {
            id: "data-003".into(),
            title: "API Integration for Market Data".into(),
            description: "Connect to financial data APIs (LSEG, S&P Capital IQ, Bloomberg) to pull real-time market data for analysis and models.".into(),
            category: Category::DataIntegration,
            subcategories: strs(&["API", "market data"]),
            complexity: Complexity::Advanced,
            implementation_time: ImplementationTime::Days,
            benefits: strs(&[
                "Real-time data access",
                "Automated data feeds",
                "Multiple source integration",
                "Reduced manual updates",
            ]),
            example_prompts: strs(&[
                "Build a Python script to pull daily stock prices from Yahoo Finance for our portfolio",
                "Create an integration to fetch FX rates and update our currency exposure model",
                "Connect to S&P Capital IQ API to pull peer company financials for benchmarking",
            ]),
            tools_used: strs(&["Python", "APIs", "requests", "pandas"]),
            source: "Anthropic Financial Services".into(),
            source_url: Some("https://www.anthropic.com/news/advancing-claude-for-financial-services".into()),
            productivity_gain: None,
            tags: strs(&["API", "market-data", "real-time", "integration"]),
        },
        // Scenario Planning
        UseCase {
            id: "scenario-001".into(),
            title: "What-If Scenario Modeling".into(),
            description: "Build flexible scenario models that allow quick toggling between base, upside, and downside cases with automatic recalculation.".into(),
            category: Category::ScenarioPlanning,
            subcategories: strs(&["what-if", "scenarios"]),
            complexity: Complexity::Intermediate,
            implementation_time: ImplementationTime::Hours,
            benefits: strs(&[
                "Quick scenario comparison",
                "Better risk understanding",
                "Improved decision support",
                "Dynamic assumptions",
            ]),
            example_prompts: strs(&[
                "Add scenario toggles to the budget model for base, optimistic, and pessimistic cases",
                "Create a what-if analysis showing impact of 10%, 20%, 30% revenue decline on cash runway",
                "Build scenario comparison tables for the three strategic options we're evaluating",
            ]),
            tools_used: strs(&["Excel", "Python", "VBA"]),
            source: "Cube Software".into(),
            source_url: Some("https://www.cubesoftware.com/blog/ai-for-fpa-financial-planning-analysis".into()),
            productivity_gain: None,
            tags: strs(&["scenarios", "what-if", "risk", "decision-support"]),
        },
        UseCase {
            id: "scenario-002".into(),
            title: "Monte Carlo Simulation".into(),
            description: "Implement Monte Carlo simulations to model uncertainty and generate probability distributions for key financial outcomes.".into(),
            category: Category::ScenarioPlanning,
            subcategories: strs(&["Monte Carlo", "simulation"]),
            complexity: Complexity::Advanced,
            implementation_time: ImplementationTime::Days,
            benefits: strs(&[
                "Quantified uncertainty",
                "Probability distributions",
                "Risk-adjusted decisions",
                "Confidence intervals",
            ]),
            example_prompts: strs(&[
                "Build a Monte Carlo simulation to model the range of possible NPV outcomes for this investment",
                "Create a cash flow simulation with probability distributions for key revenue and expense drivers",
                "Run 10,000 iterations to model the probability of achieving our revenue target",
            ]),
            tools_used: strs(&["Python", "numpy", "@RISK", "Excel"]),
            source: "Anthropic Financial Services".into(),
            source_url: Some("https://www.anthropic.com/news/claude-for-financial-services".into()),
            productivity_gain: None,
            tags: strs(&["Monte-Carlo", "simulation", "probability", "risk"]),
        },
        UseCase {
            id: "scenario-003".into(),
            title: "Sensitivity Analysis Automation".into(),
            description: "Create automated sensitivity tables and tornado charts showing the impact of key assumption changes on financial outcomes.".into(),
            category: Category::ScenarioPlanning,
            subcategories: strs(&["sensitivity", "tornado charts"]),
            complexity: Complexity::Intermediate,
            implementation_time: ImplementationTime::Hours,
            benefits: strs(&[
                "Identify key value drivers",
                "Visual impact analysis",
                "Better assumption focus",
                "Quick recalculation",
            ]),
            example_prompts: strs(&[
                "Create a two-way sensitivity table showing IRR across different entry multiples and exit years",
                "Build a tornado chart showing which assumptions have the largest impact on project NPV",
                "Generate sensitivity analysis for the DCF model varying WACC and growth rates",
            ]),
            tools_used: strs(&["Excel", "Python", "matplotlib"]),
            source: "F9 Finance".into(),
            source_url: Some("https://www.f9finance.com/claude-for-finance/".into()),
            productivity_gain: None,
            tags: strs(&["sensitivity", "tornado", "data-tables", "visualization"]),
        },
        // Compliance
        UseCase {
            id: "compliance-001".into(),
            title: "SOX Documentation Automation".into(),
            description: "Automate the creation and maintenance of SOX compliance documentation, control descriptions, and testing procedures.".into(),
            category: Category::Compliance,
            subcategories: strs(&["SOX", "documentation"]),
            complexity: Complexity::Intermediate,
            implementation_time: ImplementationTime::Hours,
            benefits: strs(&[
                "Consistent documentation",
                "Faster audit preparation",
                "Reduced compliance burden",
                "Better control visibility",
            ]),
            example_prompts: strs(&[
                "Create SOX control documentation for the revenue recognition process",
                "Generate testing procedures for our key financial controls",
                "Update control descriptions to reflect changes in our close process",
            ]),
            tools_used: strs(&["Word", "Excel", "documentation tools"]),
            source: "Anthropic Financial Services".into(),
            source_url: Some("https://www.anthropic.com/news/claude-for-financial-services".into()),
            productivity_gain: None,
            tags: strs(&["SOX", "compliance", "audit", "controls"]),
        },
        UseCase {
            id: "compliance-002".into(),
            title: "Audit Support Package Preparation".into(),
            description: "Automate the preparation of audit support packages with proper documentation, reconciliations, and supporting schedules.".into(),
            category: Category::Compliance,
            subcategories: strs(&["audit", "documentation"]),
            complexity: Complexity::Intermediate,
            implementation_time: ImplementationTime::Hours,
            benefits: strs(&[
                "Faster PBC preparation",
                "Complete documentation",
                "Reduced auditor questions",
                "Consistent format",
            ]),
            example_prompts: strs(&[
                "Create an audit support package for the inventory balance with roll-forward and support",
                "Generate reconciliations for all balance sheet accounts with proper sign-off sections",
                "Prepare the revenue substantive testing package with sample selections",
            ]),
            tools_used: strs(&["Excel", "Word", "Python"]),
            source: "Anthropic Financial Services".into(),
            source_url: Some("https://www.anthropic.com/news/advancing-claude-for-financial-services".into()),
            productivity_gain: None,
            tags: strs(&["audit", "PBC", "documentation", "reconciliation"]),
        },
        // Automation
        UseCase {
            id: "automation-001".into(),
            title: "Month-End Close Automation".into(),
            description: "Automate repetitive month-end close tasks including journal entry preparation, reconciliation generation, and close checklist tracking.".into(),
            category: Category::Automation,
            subcategories: strs(&["month-end", "close"]),
            complexity: Complexity::Intermediate,
            implementation_time: ImplementationTime::Hours,
            benefits: strs(&[
                "Faster close cycle",
                "Reduced errors",
                "Consistent processes",
                "Better tracking",
            ]),
            example_prompts: strs(&[
                "Create a script to generate standard month-end journal entries from our accrual template",
                "Build an automated close checklist that tracks completion status and sends reminders",
                "Automate the bank reconciliation process by matching transactions from the bank statement",
            ]),
            tools_used: strs(&["Python", "Excel", "VBA"]),
            source: "Cube Software".into(),
            source_url: Some("https://www.cubesoftware.com/blog/ai-for-fpa-financial-planning-analysis".into()),
            productivity_gain: None,
            tags: strs(&["month-end", "close", "journals", "reconciliation"]),
        },
        UseCase {
            id: "automation-002".into(),
            title: "Scheduled Report Distribution".into(),
            description: "Build automated workflows to generate and distribute financial reports on a scheduled basis to stakeholders.".into(),
            category: Category::Automation,
            subcategories: strs(&["scheduling", "distribution"]),
            complexity: Complexity::Intermediate,
            implementation_time: ImplementationTime::Hours,
            benefits: strs(&[
                "Consistent delivery",
                "No manual distribution",
                "Audit trail",
                "Stakeholder self-service",
            ]),
            example_prompts: strs(&[
                "Create a Python script to generate the weekly sales report and email it to the leadership team",
                "Build an automation to update the dashboard data and post to Slack every Monday morning",
                "Set up scheduled generation of P&L reports for each department head",
            ]),
            tools_used: strs(&["Python", "cron", "email APIs", "Slack API"]),
            source: "Claude Code Best Practices".into(),
            source_url: Some("https://www.anthropic.com/engineering/claude-code-best-practices".into()),
            productivity_gain: None,
            tags: strs(&["scheduling", "email", "distribution", "automation"]),
        },
        UseCase {
            id: "automation-003".into(),
            title: "Data Validation and Quality Checks".into(),
            description: "Implement automated data validation rules to catch errors, inconsistencies, and anomalies in financial data before they impact reports.".into(),
            category: Category::Automation,
            subcategories: strs(&["data quality", "validation"]),
            complexity: Complexity::Intermediate,
            implementation_time: ImplementationTime::Hours,
            benefits: strs(&[
                "Early error detection",
                "Improved data quality",
                "Reduced rework",
                "Audit confidence",
            ]),
            example_prompts: strs(&[
                "Create validation rules to check that debits equal credits for all journal entries",
                "Build a data quality dashboard that flags anomalies in daily transaction data",
                "Implement checks to ensure all required fields are populated before close",
            ]),
            tools_used: strs(&["Python", "pandas", "Great Expectations"]),
            source: "Anthropic Financial Services".into(),
            source_url: Some("https://www.anthropic.com/news/advancing-claude-for-financial-services".into()),
            productivity_gain: None,
            tags: strs(&["validation", "data-quality", "errors", "checks"]),
        },
        // Excel Integration
        UseCase {
            id: "excel-001".into(),
            title: "Excel Template Standardization".into(),
            description: "Create and maintain standardized Excel templates for budgets, forecasts, and reports with consistent formatting and structure.".into(),
            category: Category::ExcelIntegration,
            subcategories: strs(&["templates", "standardization"]),
            complexity: Complexity::Beginner,
            implementation_time: ImplementationTime::Hours,
            benefits: strs(&[
                "Consistent look and feel",
                "Reduced formatting time",
                "Easier consolidation",
                "Better version control",
            ]),
            example_prompts: strs(&[
                "Create a standardized P&L template with proper formatting and conditional highlighting",
                "Build a budget input template with data validation and protected formulas",
                "Design a financial model template with consistent color coding and navigation",
            ]),
            tools_used: strs(&["Excel", "VBA"]),
            source: "Claude in Excel".into(),
            source_url: Some("https://claude.com/claude-in-excel".into()),
            productivity_gain: None,
            tags: strs(&["templates", "Excel", "formatting", "standardization"]),
        },
        UseCase {
            id: "excel-002".into(),
            title: "VBA Macro Development".into(),
            description: "Develop VBA macros to automate repetitive Excel tasks, create custom functions, and build interactive tools.".into(),
            category: Category::ExcelIntegration,
            subcategories: strs(&["VBA", "macros"]),
            complexity: Complexity::Intermediate,
            implementation_time: ImplementationTime::Hours,
            benefits: strs(&[
                "Task automation",
                "Custom functionality",
                "Time savings",
                "Reduced errors",
            ]),
            example_prompts: strs(&[
                "Write a VBA macro to format all worksheets in the workbook consistently",
                "Create a custom function to calculate weighted average cost of capital",
                "Build a macro to export each worksheet as a separate PDF file",
            ]),
            tools_used: strs(&["Excel", "VBA"]),
            source: "Claude in Excel".into(),
            source_url: Some("https://claude.com/claude-in-excel".into()),
            productivity_gain: None,
            tags: strs(&["VBA", "macros", "automation", "custom-functions"]),
        },
        UseCase {
            id: "excel-003".into(),
            title: "Excel-Python Integration".into(),
            description: "Bridge Excel and Python to leverage advanced analytics while maintaining familiar Excel interface for end users.".into(),
            category: Category::ExcelIntegration,
            subcategories: strs(&["Python", "xlwings"]),
            complexity: Complexity::Advanced,
            implementation_time: ImplementationTime::Days,
            benefits: strs(&[
                "Best of both worlds",
                "Advanced analytics in Excel",
                "Familiar user interface",
                "Scalable processing",
            ]),
            example_prompts: strs(&[
                "Create a Python script that reads data from Excel, performs ML analysis, and writes results back",
                "Build an xlwings integration to run Python forecasting models from Excel buttons",
                "Set up a workflow where Excel triggers Python analysis and receives formatted results",
            ]),
            tools_used: strs(&["Python", "xlwings", "openpyxl", "Excel"]),
            source: "Data Studios".into(),
            source_url: Some("https://www.datastudios.org/post/claude-and-spreadsheets-advanced-data-analysis-with-ai-in-2025".into()),
            productivity_gain: None,
            tags: strs(&["Python", "xlwings", "integration", "analytics"]),
        },
    ]
}
