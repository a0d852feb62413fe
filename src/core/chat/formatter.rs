pub struct TableFormatter;

// 表头至少比自身宽2个字符
const MIN_PADDING: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Align {
    Left,
    Right,
}

struct ColumnLayout {
    width: usize,
    align: Align,
    cells: Vec<String>,
}

impl TableFormatter {
    /// 格式化为带边框的网格表格
    /// 单元格左右各留1个空格，列宽取表头宽度+2和该列最长内容中的较大者
    /// 非空单元格全是数字的列按小数点对齐后右对齐，其余左对齐
    /// 表头比列少时从左边补空表头，比列多时多出的表头丢弃
    pub fn format_grid(headers: &[String], rows: &[Vec<String>]) -> String {
        let column_count = rows
            .iter()
            .map(|row| row.len())
            .max()
            .unwrap_or(headers.len());
        let headers = fit_headers(headers, column_count);

        let columns: Vec<ColumnLayout> = headers
            .iter()
            .enumerate()
            .map(|(i, header)| {
                let cells: Vec<&str> = rows.iter().map(|row| cell(row, i)).collect();
                layout_column(header, &cells)
            })
            .collect();
        let widths: Vec<usize> = columns.iter().map(|c| c.width).collect();
        let aligns: Vec<Align> = columns.iter().map(|c| c.align).collect();

        let mut result = String::new();
        result.push_str(&Self::separator(&widths, '-'));
        result.push('\n');
        // 表头跟随列的对齐方式
        result.push_str(&Self::format_row(&headers, &widths, &aligns));
        result.push('\n');
        result.push_str(&Self::separator(&widths, '='));

        for r in 0..rows.len() {
            let line: Vec<String> = columns.iter().map(|c| c.cells[r].clone()).collect();
            result.push('\n');
            result.push_str(&Self::format_row(&line, &widths, &aligns));
            result.push('\n');
            result.push_str(&Self::separator(&widths, '-'));
        }

        if rows.is_empty() {
            result.push('\n');
            result.push_str(&Self::separator(&widths, '-'));
        }

        result
    }

    fn separator(widths: &[usize], fill: char) -> String {
        let mut line = String::from("+");
        for width in widths {
            line.extend(std::iter::repeat(fill).take(width + 2));
            line.push('+');
        }
        line
    }

    fn format_row(cells: &[String], widths: &[usize], aligns: &[Align]) -> String {
        let mut line = String::from("|");
        for (i, width) in widths.iter().enumerate() {
            let content = cell(cells, i);
            let padding = width.saturating_sub(width_of(content));
            line.push(' ');
            match aligns[i] {
                Align::Left => {
                    line.push_str(content);
                    line.push_str(&" ".repeat(padding));
                }
                Align::Right => {
                    line.push_str(&" ".repeat(padding));
                    line.push_str(content);
                }
            }
            line.push_str(" |");
        }
        line
    }
}

fn fit_headers(headers: &[String], column_count: usize) -> Vec<String> {
    if headers.len() >= column_count {
        return headers[..column_count].to_vec();
    }
    let mut fitted = vec![String::new(); column_count - headers.len()];
    fitted.extend_from_slice(headers);
    fitted
}

fn layout_column(header: &str, cells: &[&str]) -> ColumnLayout {
    let mut values = cells.iter().filter(|v| !v.is_empty()).peekable();
    let numeric = values.peek().is_some() && values.all(|v| is_number(v));

    let (align, cells): (Align, Vec<String>) = if numeric {
        // 小数点后位数不足的补空格，整数视为 -1
        let points: Vec<isize> = cells.iter().map(|c| after_point(c)).collect();
        let max_point = points.iter().copied().max().unwrap_or(-1);
        let padded = cells
            .iter()
            .zip(&points)
            .map(|(c, p)| format!("{}{}", c, " ".repeat((max_point - p) as usize)))
            .collect();
        (Align::Right, padded)
    } else {
        (Align::Left, cells.iter().map(|c| c.to_string()).collect())
    };

    let width = cells
        .iter()
        .map(|c| width_of(c))
        .chain(std::iter::once(width_of(header) + MIN_PADDING))
        .max()
        .unwrap_or(0);

    ColumnLayout { width, align, cells }
}

fn cell(row: &[String], i: usize) -> &str {
    row.get(i).map(String::as_str).unwrap_or("")
}

fn width_of(text: &str) -> usize {
    text.chars().count()
}

fn is_number(text: &str) -> bool {
    text.trim().parse::<f64>().is_ok()
}

fn after_point(text: &str) -> isize {
    if !is_number(text) || text.trim().parse::<i64>().is_ok() {
        return -1;
    }
    let lower = text.to_lowercase();
    match lower.rfind('.').or_else(|| lower.rfind('e')) {
        Some(pos) => (width_of(&lower) - width_of(&lower[..pos]) - 1) as isize,
        None => -1,
    }
}
